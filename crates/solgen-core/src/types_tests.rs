use crate::types::{ENCRYPTED_TYPES, PLAINTEXT_TYPES, Rank, TypeTag, UnknownType};

#[test]
fn encrypted_and_plaintext_are_disjoint() {
    assert!(ENCRYPTED_TYPES.iter().all(|t| t.is_encrypted()));
    assert!(PLAINTEXT_TYPES.iter().all(|t| !t.is_encrypted()));
}

#[test]
fn ranks_ascend_within_each_class() {
    for list in [ENCRYPTED_TYPES, PLAINTEXT_TYPES] {
        let ranks: Vec<Rank> = list.iter().map(|t| t.rank()).collect();
        assert!(ranks.windows(2).all(|w| w[0] < w[1]), "{ranks:?}");
    }
}

#[test]
fn counterparts_share_rank() {
    for (enc, plain) in ENCRYPTED_TYPES.iter().zip(PLAINTEXT_TYPES.iter()) {
        assert_eq!(enc.rank(), plain.rank());
        assert_eq!(enc.plaintext(), *plain);
        assert_eq!(plain.encrypted(), *enc);
    }
}

#[test]
fn counterpart_is_identity_within_class() {
    assert_eq!(TypeTag::Uint32.plaintext(), TypeTag::Uint32);
    assert_eq!(TypeTag::Euint32.encrypted(), TypeTag::Euint32);
}

#[test]
fn comparison_only_types() {
    let comparison: Vec<TypeTag> = ENCRYPTED_TYPES
        .into_iter()
        .filter(|t| t.is_comparison_only())
        .collect();
    assert_eq!(comparison, vec![TypeTag::Ebool, TypeTag::Ebytes]);
    assert!(!TypeTag::Bool.is_comparison_only());
}

#[test]
fn byte_like_types() {
    assert!(TypeTag::Ebytes.is_byte_like());
    assert!(TypeTag::Bytes.is_byte_like());
    assert!(!TypeTag::Euint256.is_byte_like());
}

#[test]
fn names_round_trip() {
    for ty in ENCRYPTED_TYPES.into_iter().chain(PLAINTEXT_TYPES) {
        assert_eq!(ty.name().parse::<TypeTag>(), Ok(ty));
        assert_eq!(ty.to_string(), ty.name());
    }
}

#[test]
fn unknown_name() {
    assert_eq!(
        "euint7".parse::<TypeTag>(),
        Err(UnknownType("euint7".to_string()))
    );
    assert_eq!(TypeTag::from_name("encrypted"), None);
}

#[test]
fn declared_adds_data_location() {
    assert_eq!(TypeTag::Bytes.declared(), "bytes memory");
    assert_eq!(TypeTag::Ebytes.declared(), "ebytes");
    assert_eq!(TypeTag::Uint8.declared(), "uint8");
}

#[test]
fn capitalized() {
    assert_eq!(TypeTag::Euint128.capitalized(), "Euint128");
    assert_eq!(TypeTag::Ebool.capitalized(), "Ebool");
}

#[test]
fn serde_uses_lowercase_names() {
    let json = serde_json::to_string(&TypeTag::Euint16).unwrap();
    assert_eq!(json, "\"euint16\"");
    let back: TypeTag = serde_json::from_str("\"uint256\"").unwrap();
    assert_eq!(back, TypeTag::Uint256);
}

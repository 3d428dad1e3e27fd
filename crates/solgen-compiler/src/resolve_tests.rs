use solgen_core::{ENCRYPTED_TYPES, PLAINTEXT_TYPES, ReturnRule, TypeTag};

use crate::resolve::{promote, resolve_return_type};
use crate::Error;

#[test]
fn decrypt_extracts_plaintext() {
    let ty = resolve_return_type("decrypt", &[TypeTag::Euint32], ReturnRule::PlaintextExtraction);
    assert_eq!(ty.unwrap(), TypeTag::Uint32);
}

#[test]
fn extraction_of_every_width() {
    for enc in ENCRYPTED_TYPES {
        let ty = resolve_return_type("decrypt", &[enc], ReturnRule::PlaintextExtraction).unwrap();
        assert!(!ty.is_encrypted());
        assert_eq!(ty.rank(), enc.rank());
    }
}

#[test]
fn extraction_rejects_plaintext_input() {
    let err = resolve_return_type("decrypt", &[TypeTag::Uint32], ReturnRule::PlaintextExtraction)
        .unwrap_err();

    assert!(matches!(
        err,
        Error::PlaintextInput { ref function, found: TypeTag::Uint32 } if function == "decrypt"
    ));
    assert_eq!(
        err.to_string(),
        "`decrypt`: plaintext extraction expects an encrypted input, got `uint32`"
    );
}

#[test]
fn extraction_rejects_wrong_arity() {
    let err = resolve_return_type(
        "decrypt",
        &[TypeTag::Euint8, TypeTag::Euint8],
        ReturnRule::PlaintextExtraction,
    )
    .unwrap_err();

    assert!(matches!(err, Error::PlaintextArity { count: 2, .. }));

    let err = resolve_return_type("decrypt", &[], ReturnRule::PlaintextExtraction).unwrap_err();
    assert!(matches!(err, Error::PlaintextArity { count: 0, .. }));
}

#[test]
fn fixed_rule_wins_over_byte_override() {
    let ty = resolve_return_type(
        "reencrypt",
        &[TypeTag::Euint8, TypeTag::Bytes],
        ReturnRule::Fixed(TypeTag::Bool),
    );
    assert_eq!(ty.unwrap(), TypeTag::Bool);
}

#[test]
fn byte_input_forces_bytes_result() {
    assert_eq!(promote(&[TypeTag::Euint8, TypeTag::Bytes]), TypeTag::Ebytes);
    assert_eq!(promote(&[TypeTag::Ebytes]), TypeTag::Ebytes);
    assert_eq!(promote(&[TypeTag::Bytes, TypeTag::Euint256]), TypeTag::Ebytes);
}

#[test]
fn promotion_picks_widest_as_encrypted() {
    assert_eq!(promote(&[TypeTag::Euint8, TypeTag::Euint64]), TypeTag::Euint64);
    assert_eq!(promote(&[TypeTag::Euint8, TypeTag::Uint32]), TypeTag::Euint32);
    assert_eq!(promote(&[TypeTag::Uint16]), TypeTag::Euint16);
    assert_eq!(promote(&[TypeTag::Ebool, TypeTag::Euint8, TypeTag::Euint8]), TypeTag::Euint8);
    assert_eq!(promote(&[]), TypeTag::Ebool);
}

#[test]
fn promotion_is_monotonic() {
    for list in [ENCRYPTED_TYPES, PLAINTEXT_TYPES] {
        for &fixed in &ENCRYPTED_TYPES {
            for (i, &lower) in list.iter().enumerate() {
                for &higher in &list[i + 1..] {
                    let low = promote(&[fixed, lower]);
                    let high = promote(&[fixed, higher]);
                    assert!(
                        low.rank() <= high.rank(),
                        "{fixed} with {lower} -> {low}, with {higher} -> {high}"
                    );
                }
            }
        }
    }
}

#[test]
fn promoted_result_is_always_encrypted() {
    for a in ENCRYPTED_TYPES.into_iter().chain(PLAINTEXT_TYPES) {
        for b in ENCRYPTED_TYPES.into_iter().chain(PLAINTEXT_TYPES) {
            assert!(promote(&[a, b]).is_encrypted());
        }
    }
}

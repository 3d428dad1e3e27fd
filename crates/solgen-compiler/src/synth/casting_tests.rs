use std::collections::HashSet;

use solgen_core::{ENCRYPTED_TYPES, TypeTag};

use crate::synth::casting::{as_type_key, cast_pairs, cast_test_contracts, casting_functions};
use crate::templates::as_type_function;

#[test]
fn every_source_reaches_every_other_encrypted_type() {
    let pairs = cast_pairs();

    assert_eq!(pairs.len(), 8 * 7 + 2 * 8);
    assert!(pairs.iter().all(|(from, to)| from != to && to.is_encrypted()));

    let unique: HashSet<_> = pairs.iter().collect();
    assert_eq!(unique.len(), pairs.len());
}

#[test]
fn sources_in_order() {
    let pairs = cast_pairs();

    assert_eq!(pairs[0], (TypeTag::Ebool, TypeTag::Euint8));
    assert_eq!(pairs[pairs.len() - 1], (TypeTag::Bytes, TypeTag::Ebytes));
}

#[test]
fn bool_cast_comes_last() {
    let functions = casting_functions();

    assert_eq!(functions.len(), cast_pairs().len() + 1);
    assert_eq!(
        functions.last().unwrap(),
        &as_type_function(TypeTag::Bool, TypeTag::Ebool)
    );
}

#[test]
fn keys() {
    assert_eq!(as_type_key(TypeTag::Euint8), "AsEuint8");
    assert_eq!(as_type_key(TypeTag::Ebytes), "AsEbytes");
}

#[test]
fn one_test_contract_per_encrypted_type() {
    let tests = cast_test_contracts();

    let keys: Vec<String> = tests.iter().map(|t| t.key.clone()).collect();
    let expected: Vec<String> = ENCRYPTED_TYPES.iter().map(|ty| as_type_key(*ty)).collect();
    assert_eq!(keys, expected);
    assert!(tests[0].source.contains("contract AsEboolTest {"));
}

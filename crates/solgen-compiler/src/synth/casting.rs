//! Type casting functions and their test contracts.

use solgen_core::{ENCRYPTED_TYPES, TypeTag};

use crate::synth::TestContract;
use crate::templates::{as_type_function, as_type_testing_contract};

/// Sources besides the encrypted types themselves.
const PLAIN_CAST_SOURCES: [TypeTag; 2] = [TypeTag::Uint256, TypeTag::Bytes];

/// Every `(from, to)` pair with `to` encrypted and `from != to`.
///
/// Sources are the encrypted types followed by `uint256` and `bytes`.
pub fn cast_pairs() -> Vec<(TypeTag, TypeTag)> {
    ENCRYPTED_TYPES
        .into_iter()
        .chain(PLAIN_CAST_SOURCES)
        .flat_map(|from| {
            ENCRYPTED_TYPES
                .into_iter()
                .filter(move |to| *to != from)
                .map(move |to| (from, to))
        })
        .collect()
}

/// All cast functions, ending with the `bool` to `ebool` cast.
pub fn casting_functions() -> Vec<String> {
    cast_pairs()
        .into_iter()
        .chain(std::iter::once((TypeTag::Bool, TypeTag::Ebool)))
        .map(|(from, to)| as_type_function(from, to))
        .collect()
}

/// `AsEuint8` for `euint8`.
pub fn as_type_key(ty: TypeTag) -> String {
    format!("As{}", ty.capitalized())
}

pub fn cast_test_contracts() -> Vec<TestContract> {
    ENCRYPTED_TYPES
        .into_iter()
        .map(|ty| TestContract::new(as_type_key(ty), as_type_testing_contract(ty)))
        .collect()
}

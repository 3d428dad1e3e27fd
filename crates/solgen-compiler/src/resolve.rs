//! Return-type resolution.
//!
//! Rules, in precedence order:
//! 1. `PlaintextExtraction`: plaintext counterpart of the single encrypted input
//! 2. `Fixed(T)`: `T`
//! 3. Any byte-like input: `ebytes`
//! 4. `Promoted`: encrypted type at the highest input rank

use solgen_core::{ReturnRule, TypeTag};

use crate::{Error, Result};

pub fn resolve_return_type(function: &str, inputs: &[TypeTag], rule: ReturnRule) -> Result<TypeTag> {
    match rule {
        ReturnRule::PlaintextExtraction => extract_plaintext(function, inputs),
        ReturnRule::Fixed(ty) => Ok(ty),
        ReturnRule::Promoted => Ok(promote(inputs)),
    }
}

fn extract_plaintext(function: &str, inputs: &[TypeTag]) -> Result<TypeTag> {
    let [input] = inputs else {
        return Err(Error::PlaintextArity {
            function: function.to_string(),
            count: inputs.len(),
        });
    };
    if !input.is_encrypted() {
        return Err(Error::PlaintextInput {
            function: function.to_string(),
            found: *input,
        });
    }
    Ok(input.plaintext())
}

/// Widest input mapped into the encrypted class.
///
/// Plaintext inputs participate through their rank, so the result is always
/// encrypted. With no inputs the lowest rank (`ebool`) is returned.
pub fn promote(inputs: &[TypeTag]) -> TypeTag {
    if inputs.iter().any(|ty| ty.is_byte_like()) {
        return TypeTag::Ebytes;
    }
    inputs
        .iter()
        .map(|ty| ty.encrypted())
        .max_by_key(|ty| ty.rank())
        .unwrap_or(TypeTag::Ebool)
}

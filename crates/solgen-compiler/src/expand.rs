//! Combinatorial signature expansion.
//!
//! Each formal parameter expands to a candidate list, the candidate lists are
//! combined with a cartesian product, and every combination is resolved into a
//! [`ConcreteSignature`]. Traversal is lexicographic: the first parameter varies
//! slowest, the last fastest.

use itertools::Itertools;
use solgen_core::{ENCRYPTED_TYPES, OperationDescriptor, PLAINTEXT_TYPES, ParameterClass, TypeTag};
use tracing::{debug, warn};

use crate::resolve::resolve_return_type;
use crate::signature::ConcreteSignature;
use crate::Result;

/// Candidate types for every parameter of `desc`, in parameter order.
pub fn candidates(desc: &OperationDescriptor) -> Vec<Vec<TypeTag>> {
    candidates_in(desc, &ENCRYPTED_TYPES, &PLAINTEXT_TYPES)
}

/// Like [`candidates`], over explicit encrypted and plaintext type lists.
///
/// Binary operations that are not boolean math skip comparison-only types.
pub fn candidates_in(
    desc: &OperationDescriptor,
    encrypted: &[TypeTag],
    plaintext: &[TypeTag],
) -> Vec<Vec<TypeTag>> {
    let skip_comparison = desc.arity() == 2 && !desc.is_boolean_math_op;

    desc.params
        .iter()
        .map(|class| match class {
            ParameterClass::Encrypted => encrypted
                .iter()
                .copied()
                .filter(|ty| !(skip_comparison && ty.is_comparison_only()))
                .collect(),
            ParameterClass::Plaintext => plaintext.to_vec(),
            ParameterClass::Fixed(ty) => vec![*ty],
        })
        .collect()
}

/// Every combination taking one element from each list.
///
/// No lists means no combinations. An empty list anywhere also means no
/// combinations.
pub fn cartesian_product<T: Clone>(lists: &[Vec<T>]) -> Vec<Vec<T>> {
    if lists.is_empty() {
        return Vec::new();
    }
    lists
        .iter()
        .map(|list| list.iter().cloned())
        .multi_cartesian_product()
        .collect()
}

/// All concrete overloads of one operation.
pub fn expand(desc: &OperationDescriptor) -> Result<Vec<ConcreteSignature>> {
    expand_in(desc, &ENCRYPTED_TYPES, &PLAINTEXT_TYPES)
}

/// Like [`expand`], over explicit encrypted and plaintext type lists.
pub fn expand_in(
    desc: &OperationDescriptor,
    encrypted: &[TypeTag],
    plaintext: &[TypeTag],
) -> Result<Vec<ConcreteSignature>> {
    let lists = candidates_in(desc, encrypted, plaintext);

    if let Some(parameter) = lists.iter().position(Vec::is_empty) {
        warn!(
            operation = %desc.name,
            parameter,
            "parameter has no candidate types, operation yields no signatures"
        );
        return Ok(Vec::new());
    }

    let signatures = cartesian_product(&lists)
        .into_iter()
        .map(|inputs| {
            let return_type = resolve_return_type(&desc.name, &inputs, desc.return_rule)?;
            Ok(ConcreteSignature::new(desc.name.clone(), inputs, return_type))
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(operation = %desc.name, count = signatures.len(), "expanded");
    Ok(signatures)
}

/// Expand every descriptor, keeping descriptor order.
pub fn expand_all(descriptors: &[OperationDescriptor]) -> Result<Vec<ConcreteSignature>> {
    let mut signatures = Vec::new();
    for desc in descriptors {
        signatures.extend(expand(desc)?);
    }
    Ok(signatures)
}

//! Per-type binding libraries (`using BindingsEuint8 for euint8 global`).

use solgen_core::{BIND_MATH_OPERATORS, TypeTag, is_bitwise_op};

use crate::signature::ConcreteSignature;
use crate::templates::{binding_library_type, operator_binding, postfix};

/// A method-style wrapper to emit inside a type's bindings library.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub operation: &'static str,
    pub unary: bool,
    /// Returns `ebool` without being a bitwise/logical operation.
    pub bool_result: bool,
}

/// Bindings for `ty`, in [`BIND_MATH_OPERATORS`] order.
///
/// An operation is bound when some signature takes only `ty`. Operations
/// without such a signature are left out.
pub fn find_bindings(ty: TypeTag, signatures: &[ConcreteSignature]) -> Vec<Binding> {
    BIND_MATH_OPERATORS
        .iter()
        .filter_map(|&operation| {
            let sig = signatures
                .iter()
                .find(|sig| sig.name == operation && sig.is_homogeneous_over(ty))?;

            if ty.is_comparison_only() && !sig.inputs.iter().all(|t| t.is_comparison_only()) {
                return None;
            }

            Some(Binding {
                operation,
                unary: sig.arity() == 1,
                bool_result: sig.return_type == TypeTag::Ebool && !is_bitwise_op(operation),
            })
        })
        .collect()
}

/// The complete bindings library for `ty`, closed with the postfix.
pub fn binding_block(ty: TypeTag, signatures: &[ConcreteSignature]) -> String {
    let mut out = binding_library_type(ty);
    for binding in find_bindings(ty, signatures) {
        out.push_str(&operator_binding(
            binding.operation,
            ty,
            binding.unary,
            binding.bool_result,
        ));
    }
    out.push_str(&postfix());
    out
}

//! Operator overloads for encrypted types.

use solgen_core::{SHORTHAND_OPERATIONS, TypeTag, is_bitwise_op};

use crate::templates::operator_overload_decl;
use crate::{Error, Result};

/// One overload per (operation with a symbol, type) pair.
///
/// Comparison-only types get bitwise/logical operators only.
pub fn operator_overloads(types: &[TypeTag]) -> Result<Vec<String>> {
    let mut decls = Vec::new();
    for op in SHORTHAND_OPERATIONS {
        let Some(symbol) = op.operator else {
            continue;
        };
        for &ty in types {
            if !ty.is_encrypted() {
                return Err(Error::NotEncrypted {
                    operation: op.name.to_string(),
                    found: ty,
                });
            }
            if !ty.is_comparison_only() || is_bitwise_op(op.name) {
                decls.push(operator_overload_decl(
                    op.name,
                    symbol,
                    ty,
                    op.unary,
                    op.returns_bool,
                ));
            }
        }
    }
    Ok(decls)
}

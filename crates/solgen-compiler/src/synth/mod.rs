//! Template dispatch.
//!
//! Each synthesizer decides which template applies and returns owned
//! fragments. Nothing here writes to shared buffers; `assemble` concatenates
//! the fragments in output order.

pub mod bindings;
pub mod body;
pub mod casting;
pub mod operators;
pub mod test_contract;

#[cfg(test)]
mod bindings_tests;
#[cfg(test)]
mod casting_tests;

pub use bindings::{Binding, binding_block, find_bindings};
pub use body::{BodyTemplate, select_body_template, synthesize_body};
pub use casting::{as_type_key, cast_pairs, cast_test_contracts, casting_functions};
pub use operators::operator_overloads;
pub use test_contract::{TestContract, TestTemplate, select_test_template, synthesize_test_contract};

//! Descriptor builders shared by unit tests.

use solgen_core::{OperationDescriptor, ParameterClass, ReturnRule, TypeTag, parse_descriptors};

/// The metadata shipped with the repository.
pub fn default_descriptors() -> Vec<OperationDescriptor> {
    parse_descriptors(include_str!("../../../metadata/operations.json"))
        .expect("bundled metadata is valid")
}

pub fn encrypted_op(name: &str, arity: usize, return_rule: ReturnRule) -> OperationDescriptor {
    OperationDescriptor::new(name, vec![ParameterClass::Encrypted; arity], return_rule)
}

pub fn binary(name: &str) -> OperationDescriptor {
    encrypted_op(name, 2, ReturnRule::Promoted)
}

pub fn comparison(name: &str) -> OperationDescriptor {
    encrypted_op(name, 2, ReturnRule::Fixed(TypeTag::Ebool))
}

pub fn unary(name: &str) -> OperationDescriptor {
    encrypted_op(name, 1, ReturnRule::Promoted)
}

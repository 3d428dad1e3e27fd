#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for solgen.
//!
//! - **Type lattice** (`types`): encrypted and plaintext types with explicit ranks
//! - **Operator tables** (`ops`): shorthand symbols, bitwise set, bindable operations
//! - **Descriptors** (`descriptor`): generic operation metadata and its JSON schema
//!
//! Everything here is pure lookup data. Expansion and code generation live in
//! `solgen-compiler`.

pub mod descriptor;
pub mod ops;
pub mod types;
pub mod utils;

#[cfg(test)]
mod types_tests;

pub use descriptor::{
    DescriptorError, OperationDescriptor, ParameterClass, RawDescriptor, ReturnRule,
    parse_descriptors,
};
pub use ops::{
    BIND_MATH_OPERATORS, BITWISE_AND_LOGICAL_OPERATIONS, SHORTHAND_OPERATIONS, ShorthandOperation,
    is_bitwise_op, operator_for, shorthand,
};
pub use types::{ENCRYPTED_TYPES, PLAINTEXT_TYPES, Rank, TypeTag, UnknownType};

//! solgen compiler: signature expansion, type resolution, and Solidity emission.
//!
//! This crate turns generic operation descriptors into generated artifacts:
//! - `expand` - per-parameter candidates and their cartesian product
//! - `resolve` - return-type resolution (extraction, fixed, byte override, promotion)
//! - `signature` - concrete signatures, their declaration grammar, and its parser
//! - `synth` - template dispatch for bodies, test contracts, operators, bindings, casts
//! - `templates` - literal Solidity and TypeScript text
//! - `assemble` - one-pass generation into [`Artifacts`]
//! - `sink` - writing artifacts to an [`ArtifactSink`]

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::path::PathBuf;

use solgen_core::{DescriptorError, TypeTag};

pub mod assemble;
pub mod expand;
pub mod metadata;
pub mod resolve;
pub mod signature;
pub mod sink;
pub mod synth;
pub mod templates;

#[cfg(test)]
mod resolve_tests;
#[cfg(test)]
pub mod test_utils;

pub use assemble::{Artifacts, generate};
pub use expand::{cartesian_product, expand, expand_all};
pub use metadata::load_descriptors;
pub use resolve::resolve_return_type;
pub use signature::{ConcreteSignature, ParsedFunction, PlaintextClass, parse_declaration};
pub use sink::{ArtifactSink, FsSink, MemorySink, OutputLayout};

/// Errors that abort a generation run.
///
/// Every variant is a contract violation between the metadata and the
/// generator. No partial output should be trusted after one is returned.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("`{function}`: plaintext extraction expects exactly one input, got {count}")]
    PlaintextArity { function: String, count: usize },

    #[error("`{function}`: plaintext extraction expects an encrypted input, got `{found}`")]
    PlaintextInput { function: String, found: TypeTag },

    #[error("invalid function declaration format: `{0}`")]
    Format(String),

    #[error("`{function}`: unsupported number of inputs ({arity})")]
    UnsupportedArity { function: String, arity: usize },

    #[error("operator overload for `{operation}`: `{found}` is not an encrypted type")]
    NotEncrypted { operation: String, found: TypeTag },

    #[error("duplicate test contract `{0}`")]
    DuplicateArtifact(String),

    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, Error>;

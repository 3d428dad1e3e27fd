//! Operation descriptors.
//!
//! Two layers:
//! - **Deserialization layer**: [`RawDescriptor`], a 1:1 mapping to the metadata JSON
//! - **Model layer**: [`OperationDescriptor`], with parameter classes and the return
//!   rule resolved against the type lattice

use serde::Deserialize;

use crate::types::{TypeTag, UnknownType};

// ============================================================================
// Deserialization Layer
// ============================================================================

/// Operation entry as produced by the metadata extractor.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawDescriptor {
    pub name: String,
    pub inputs: Vec<String>,
    #[serde(default)]
    pub returns: Option<String>,
    #[serde(default)]
    pub boolean_math: bool,
    #[serde(default)]
    pub same_type: bool,
    #[serde(default)]
    pub arity: Option<usize>,
}

/// Errors raised while turning metadata into descriptors.
#[derive(Debug, thiserror::Error)]
pub enum DescriptorError {
    #[error("malformed metadata: {0}")]
    Json(#[from] serde_json::Error),

    #[error("operation `{operation}`: {source}")]
    Type {
        operation: String,
        source: UnknownType,
    },

    #[error("operation `{operation}`: declared arity {declared} but {actual} inputs")]
    ArityMismatch {
        operation: String,
        declared: usize,
        actual: usize,
    },
}

/// Parse a metadata document into resolved descriptors, preserving order.
pub fn parse_descriptors(json: &str) -> Result<Vec<OperationDescriptor>, DescriptorError> {
    let raw: Vec<RawDescriptor> = serde_json::from_str(json)?;
    raw.into_iter().map(OperationDescriptor::try_from).collect()
}

// ============================================================================
// Model Layer
// ============================================================================

/// What a formal parameter expands to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParameterClass {
    /// Every encrypted type, subject to the comparison-type exclusion.
    Encrypted,
    /// Every plaintext type.
    Plaintext,
    /// Exactly this type.
    Fixed(TypeTag),
}

impl ParameterClass {
    pub fn parse(s: &str) -> Result<Self, UnknownType> {
        match s {
            "encrypted" => Ok(Self::Encrypted),
            "plaintext" => Ok(Self::Plaintext),
            other => other.parse().map(Self::Fixed),
        }
    }
}

/// How the return type of a concrete signature is decided.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReturnRule {
    /// Plaintext counterpart of the single encrypted input.
    PlaintextExtraction,
    /// Always this type.
    Fixed(TypeTag),
    /// Encrypted type at the highest input rank.
    #[default]
    Promoted,
}

impl ReturnRule {
    /// `None` and the `"encrypted"` sentinel both mean promotion.
    pub fn parse(s: Option<&str>) -> Result<Self, UnknownType> {
        match s {
            None | Some("encrypted") => Ok(Self::Promoted),
            Some("plaintext") => Ok(Self::PlaintextExtraction),
            Some(other) => other.parse().map(Self::Fixed),
        }
    }
}

/// A generic operation, expanded into concrete overloads by the compiler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperationDescriptor {
    pub name: String,
    pub params: Vec<ParameterClass>,
    pub return_rule: ReturnRule,
    pub is_boolean_math_op: bool,
    pub requires_same_type: bool,
}

impl OperationDescriptor {
    pub fn new(name: impl Into<String>, params: Vec<ParameterClass>, return_rule: ReturnRule) -> Self {
        Self {
            name: name.into(),
            params,
            return_rule,
            is_boolean_math_op: false,
            requires_same_type: false,
        }
    }

    pub fn boolean_math(mut self, value: bool) -> Self {
        self.is_boolean_math_op = value;
        self
    }

    pub fn same_type(mut self, value: bool) -> Self {
        self.requires_same_type = value;
        self
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// True when every parameter is the `Encrypted` class.
    pub fn all_encrypted(&self) -> bool {
        self.params.iter().all(|p| *p == ParameterClass::Encrypted)
    }
}

impl TryFrom<RawDescriptor> for OperationDescriptor {
    type Error = DescriptorError;

    fn try_from(raw: RawDescriptor) -> Result<Self, Self::Error> {
        let with_name = |source| DescriptorError::Type {
            operation: raw.name.clone(),
            source,
        };

        if let Some(declared) = raw.arity {
            if declared != raw.inputs.len() {
                return Err(DescriptorError::ArityMismatch {
                    operation: raw.name.clone(),
                    declared,
                    actual: raw.inputs.len(),
                });
            }
        }

        let params = raw
            .inputs
            .iter()
            .map(|s| ParameterClass::parse(s))
            .collect::<Result<Vec<_>, _>>()
            .map_err(with_name)?;
        let return_rule = ReturnRule::parse(raw.returns.as_deref()).map_err(with_name)?;

        Ok(Self {
            name: raw.name,
            params,
            return_rule,
            is_boolean_math_op: raw.boolean_math,
            requires_same_type: raw.same_type,
        })
    }
}

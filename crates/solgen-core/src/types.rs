//! Type lattice for encrypted and plaintext values.
//!
//! Two disjoint classes, each totally ordered by rank:
//! - **Encrypted**: ciphertext handles (`ebool` .. `euint256`, `ebytes`)
//! - **Plaintext**: the matching unencrypted types (`bool` .. `uint256`, `bytes`)
//!
//! Rank follows bit-width, so an encrypted type and its plaintext counterpart
//! share a rank. Comparing ranks across classes is only meaningful through
//! that shared width, never through declaration order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::utils::capitalize;

/// A concrete type that can appear in a generated signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Ebool,
    Euint8,
    Euint16,
    Euint32,
    Euint64,
    Euint128,
    Euint256,
    Ebytes,
    Bool,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uint128,
    Uint256,
    Bytes,
}

/// Promotion rank. Higher is wider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank(pub u8);

/// Encrypted types in ascending rank.
pub const ENCRYPTED_TYPES: [TypeTag; 8] = [
    TypeTag::Ebool,
    TypeTag::Euint8,
    TypeTag::Euint16,
    TypeTag::Euint32,
    TypeTag::Euint64,
    TypeTag::Euint128,
    TypeTag::Euint256,
    TypeTag::Ebytes,
];

/// Plaintext types in ascending rank.
pub const PLAINTEXT_TYPES: [TypeTag; 8] = [
    TypeTag::Bool,
    TypeTag::Uint8,
    TypeTag::Uint16,
    TypeTag::Uint32,
    TypeTag::Uint64,
    TypeTag::Uint128,
    TypeTag::Uint256,
    TypeTag::Bytes,
];

/// Error returned when a name does not denote any known type.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown type `{0}`")]
pub struct UnknownType(pub String);

impl TypeTag {
    /// Source-level spelling of the type.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ebool => "ebool",
            Self::Euint8 => "euint8",
            Self::Euint16 => "euint16",
            Self::Euint32 => "euint32",
            Self::Euint64 => "euint64",
            Self::Euint128 => "euint128",
            Self::Euint256 => "euint256",
            Self::Ebytes => "ebytes",
            Self::Bool => "bool",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Uint128 => "uint128",
            Self::Uint256 => "uint256",
            Self::Bytes => "bytes",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        ENCRYPTED_TYPES
            .into_iter()
            .chain(PLAINTEXT_TYPES)
            .find(|ty| ty.name() == name)
    }

    pub const fn is_encrypted(self) -> bool {
        matches!(
            self,
            Self::Ebool
                | Self::Euint8
                | Self::Euint16
                | Self::Euint32
                | Self::Euint64
                | Self::Euint128
                | Self::Euint256
                | Self::Ebytes
        )
    }

    pub const fn rank(self) -> Rank {
        match self {
            Self::Ebool | Self::Bool => Rank(0),
            Self::Euint8 | Self::Uint8 => Rank(1),
            Self::Euint16 | Self::Uint16 => Rank(2),
            Self::Euint32 | Self::Uint32 => Rank(3),
            Self::Euint64 | Self::Uint64 => Rank(4),
            Self::Euint128 | Self::Uint128 => Rank(5),
            Self::Euint256 | Self::Uint256 => Rank(6),
            Self::Ebytes | Self::Bytes => Rank(7),
        }
    }

    /// Types restricted to equality, ordering, and bitwise/logical operations.
    pub const fn is_comparison_only(self) -> bool {
        matches!(self, Self::Ebool | Self::Ebytes)
    }

    pub const fn is_byte_like(self) -> bool {
        matches!(self, Self::Ebytes | Self::Bytes)
    }

    /// Plaintext type of the same width. Identity for plaintext types.
    pub const fn plaintext(self) -> Self {
        match self {
            Self::Ebool => Self::Bool,
            Self::Euint8 => Self::Uint8,
            Self::Euint16 => Self::Uint16,
            Self::Euint32 => Self::Uint32,
            Self::Euint64 => Self::Uint64,
            Self::Euint128 => Self::Uint128,
            Self::Euint256 => Self::Uint256,
            Self::Ebytes => Self::Bytes,
            plain => plain,
        }
    }

    /// Encrypted type of the same width. Identity for encrypted types.
    pub const fn encrypted(self) -> Self {
        match self {
            Self::Bool => Self::Ebool,
            Self::Uint8 => Self::Euint8,
            Self::Uint16 => Self::Euint16,
            Self::Uint32 => Self::Euint32,
            Self::Uint64 => Self::Euint64,
            Self::Uint128 => Self::Euint128,
            Self::Uint256 => Self::Euint256,
            Self::Bytes => Self::Ebytes,
            enc => enc,
        }
    }

    /// Data location required when the type is a parameter or return value.
    pub const fn data_location(self) -> Option<&'static str> {
        match self {
            Self::Bytes => Some("memory"),
            _ => None,
        }
    }

    /// Spelling used in parameter and return lists, e.g. `bytes memory`.
    pub fn declared(self) -> String {
        match self.data_location() {
            Some(location) => format!("{} {}", self.name(), location),
            None => self.name().to_string(),
        }
    }

    /// `euint8` becomes `Euint8`, used to build `asEuint8` style names.
    pub fn capitalized(self) -> String {
        capitalize(self.name())
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TypeTag {
    type Err = UnknownType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownType(s.to_string()))
    }
}

//! Concrete signatures and the declaration grammar.
//!
//! Generation passes [`ConcreteSignature`] values around directly. The textual
//! form `function NAME(T0 input0, ...) internal pure returns (R);` is what the
//! library output contains, and [`parse_declaration`] recovers the structure
//! from it again.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use solgen_core::TypeTag;

use crate::{Error, Result};

/// Visibility and mutability of every generated library function.
pub const VISIBILITY: &str = "internal pure";

/// Whether a signature starts with an encrypted input.
///
/// Selects between the encrypted and plaintext variants of body templates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaintextClass {
    /// First input is encrypted.
    None,
    /// First input is plaintext (or there are no inputs).
    All,
}

impl PlaintextClass {
    pub fn of(inputs: &[TypeTag]) -> Self {
        match inputs.first() {
            Some(ty) if ty.is_encrypted() => Self::None,
            _ => Self::All,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::All => "all",
        }
    }
}

/// One type-specialized overload of a generic operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConcreteSignature {
    pub name: String,
    pub inputs: Vec<TypeTag>,
    pub return_type: TypeTag,
}

impl ConcreteSignature {
    pub fn new(name: impl Into<String>, inputs: Vec<TypeTag>, return_type: TypeTag) -> Self {
        Self {
            name: name.into(),
            inputs,
            return_type,
        }
    }

    pub fn arity(&self) -> usize {
        self.inputs.len()
    }

    pub fn plaintext_class(&self) -> PlaintextClass {
        PlaintextClass::of(&self.inputs)
    }

    /// True when every input is exactly `ty`.
    pub fn is_homogeneous_over(&self, ty: TypeTag) -> bool {
        !self.inputs.is_empty() && self.inputs.iter().all(|input| *input == ty)
    }

    /// Parameter list as rendered in declarations: `euint8 input0, bytes memory input1`.
    pub fn parameter_list(&self) -> String {
        self.inputs
            .iter()
            .enumerate()
            .map(|(idx, ty)| format!("{} input{idx}", ty.declared()))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Function header without the trailing `;` or body.
    pub fn header(&self) -> String {
        format!(
            "function {}({}) {VISIBILITY} returns ({})",
            self.name,
            self.parameter_list(),
            self.return_type.declared()
        )
    }

    pub fn declaration(&self) -> String {
        format!("{};", self.header())
    }
}

impl fmt::Display for ConcreteSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.declaration())
    }
}

/// Structure recovered from a declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedFunction {
    pub func_name: String,
    pub inputs: Vec<TypeTag>,
    pub return_type: TypeTag,
    pub input_plaintext: PlaintextClass,
}

impl ParsedFunction {
    pub fn into_signature(self) -> ConcreteSignature {
        ConcreteSignature::new(self.func_name, self.inputs, self.return_type)
    }
}

impl From<&ConcreteSignature> for ParsedFunction {
    fn from(sig: &ConcreteSignature) -> Self {
        Self {
            func_name: sig.name.clone(),
            inputs: sig.inputs.clone(),
            return_type: sig.return_type,
            input_plaintext: sig.plaintext_class(),
        }
    }
}

/// `function NAME(PARAMS) internal pure returns (RETURNS);`
static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^function ([A-Za-z_]\w*)\(([^()]*)\) internal pure returns \(([^()]*)\);$")
        .expect("declaration pattern is valid")
});

/// Parse `function NAME(T0 p0, ...) internal pure returns (R);`.
///
/// Data locations (`memory`, `calldata`, `storage`) are accepted and dropped.
pub fn parse_declaration(text: &str) -> Result<ParsedFunction> {
    let malformed = || Error::Format(text.to_string());

    let caps = DECLARATION.captures(text.trim()).ok_or_else(malformed)?;
    let (_, [name, params, returns]) = caps.extract();

    let inputs = if params.trim().is_empty() {
        Vec::new()
    } else {
        params
            .split(',')
            .map(|param| parse_slot(param, true))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(malformed)?
    };
    let return_type = parse_slot(returns, false).ok_or_else(malformed)?;

    Ok(ParsedFunction {
        func_name: name.to_string(),
        input_plaintext: PlaintextClass::of(&inputs),
        inputs,
        return_type,
    })
}

/// `TYPE [LOCATION] NAME` for parameters, `TYPE [LOCATION]` for returns.
fn parse_slot(text: &str, named: bool) -> Option<TypeTag> {
    let mut tokens: Vec<&str> = text.split_whitespace().collect();
    if named {
        let name = tokens.pop()?;
        if !is_identifier(name) {
            return None;
        }
    }
    match tokens.as_slice() {
        [ty] => TypeTag::from_name(ty),
        [ty, location] if is_data_location(location) => TypeTag::from_name(ty),
        _ => None,
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_data_location(s: &str) -> bool {
    matches!(s, "memory" | "calldata" | "storage")
}

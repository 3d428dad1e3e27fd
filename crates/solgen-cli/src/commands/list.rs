//! `--list`: print expanded signatures without generating.

use serde::Serialize;
use solgen_compiler::{ConcreteSignature, PlaintextClass, expand_all};
use solgen_core::OperationDescriptor;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct ListEntry<'a> {
    declaration: String,
    #[serde(flatten)]
    signature: &'a ConcreteSignature,
    input_plaintext: PlaintextClass,
}

#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error(transparent)]
    Compile(#[from] solgen_compiler::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub fn render_descriptors(
    descriptors: &[OperationDescriptor],
    format: ListFormat,
) -> Result<String, ListError> {
    let signatures = expand_all(descriptors)?;
    Ok(render(&signatures, format)?)
}

pub fn render(signatures: &[ConcreteSignature], format: ListFormat) -> serde_json::Result<String> {
    match format {
        ListFormat::Text => Ok(signatures
            .iter()
            .map(|sig| format!("{sig}\n"))
            .collect()),
        ListFormat::Json => {
            let entries: Vec<ListEntry<'_>> = signatures
                .iter()
                .map(|sig| ListEntry {
                    declaration: sig.declaration(),
                    signature: sig,
                    input_plaintext: sig.plaintext_class(),
                })
                .collect();
            let mut out = serde_json::to_string_pretty(&entries)?;
            out.push('\n');
            Ok(out)
        }
    }
}

//! Loading operation descriptors from the extractor's JSON output.

use std::fs;
use std::path::Path;

use solgen_core::{OperationDescriptor, parse_descriptors};

use crate::{Error, Result};

pub fn load_descriptors(path: &Path) -> Result<Vec<OperationDescriptor>> {
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_descriptors(&text)?)
}

//! Destinations for generated artifacts.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::info;

use crate::assemble::Artifacts;
use crate::{Error, Result};

/// Receives `(path, content)` pairs.
pub trait ArtifactSink {
    fn write(&mut self, path: &Path, content: &str) -> Result<()>;
}

/// Writes to the filesystem, creating parent directories as needed.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsSink;

impl ArtifactSink for FsSink {
    fn write(&mut self, path: &Path, content: &str) -> Result<()> {
        let io_err = |source| Error::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, content).map_err(io_err)?;
        info!(path = %path.display(), bytes = content.len(), "wrote artifact");
        Ok(())
    }
}

/// Keeps artifacts in memory, in write order.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    pub files: IndexMap<PathBuf, String>,
}

impl ArtifactSink for MemorySink {
    fn write(&mut self, path: &Path, content: &str) -> Result<()> {
        self.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

/// Where each artifact goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputLayout {
    pub(crate) library: PathBuf,
    pub(crate) contracts_dir: PathBuf,
    pub(crate) abi: PathBuf,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self {
            library: PathBuf::from("FHE.sol"),
            contracts_dir: PathBuf::from("solidity/tests/contracts"),
            abi: PathBuf::from("solidity/tests/abis.ts"),
        }
    }
}

impl OutputLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the library output file.
    pub fn library(mut self, path: impl Into<PathBuf>) -> Self {
        self.library = path.into();
        self
    }

    /// Set the directory receiving one `<Name>.sol` per test contract.
    pub fn contracts_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.contracts_dir = path.into();
        self
    }

    /// Set the ABI module output file.
    pub fn abi(mut self, path: impl Into<PathBuf>) -> Self {
        self.abi = path.into();
        self
    }

    pub fn library_path(&self) -> &Path {
        &self.library
    }

    pub fn contract_path(&self, key: &str) -> PathBuf {
        self.contracts_dir.join(format!("{key}.sol"))
    }

    pub fn abi_path(&self) -> &Path {
        &self.abi
    }
}

impl Artifacts {
    /// Write library, test contracts, and ABI module, in that order.
    pub fn write_to(&self, layout: &OutputLayout, sink: &mut dyn ArtifactSink) -> Result<()> {
        sink.write(layout.library_path(), &self.library)?;
        for (key, source) in &self.contracts {
            sink.write(&layout.contract_path(key), source)?;
        }
        sink.write(layout.abi_path(), &self.abi)
    }
}

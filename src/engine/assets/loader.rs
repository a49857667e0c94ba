// Asset file access

use super::SheetError;
use std::path::{Path, PathBuf};

/// Resolves asset names against a base directory and reads them from disk
#[derive(Debug, Clone)]
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    /// Create a new asset loader with the given base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the full path for an asset
    pub fn resolve_path(&self, name: &str) -> PathBuf {
        self.base_path.join(name)
    }

    /// Read a file's bytes
    pub fn read_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, SheetError> {
        let path = path.as_ref();
        std::fs::read(path).map_err(|source| SheetError::File {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read a file as UTF-8 text
    pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String, SheetError> {
        let path = path.as_ref();
        std::fs::read_to_string(path).map_err(|source| SheetError::File {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get the base path
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

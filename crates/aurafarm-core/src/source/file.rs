//! Snapshots read from disk.
//!
//! `.toml` files are parsed as TOML, everything else as JSON. The file is
//! re-read on every fetch so an external writer can update it in place.

use std::path::{Path, PathBuf};

use super::SnapshotSource;
use crate::error::SourceError;
use crate::readings::EnvironmentalSnapshot;

/// Source reading a snapshot file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    name: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = format!("file:{}", path.display());
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_toml(&self) -> bool {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
    }

    /// Parse snapshot text in this source's format.
    fn parse(&self, content: &str) -> Result<EnvironmentalSnapshot, SourceError> {
        let parsed = if self.is_toml() {
            toml::from_str(content).map_err(|e| e.to_string())
        } else {
            serde_json::from_str(content).map_err(|e| e.to_string())
        };

        parsed.map_err(|message| SourceError::ParseFailed {
            path: self.path.clone(),
            message,
        })
    }
}

impl SnapshotSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&mut self) -> Result<EnvironmentalSnapshot, SourceError> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|source| SourceError::ReadFailed {
                path: self.path.clone(),
                source,
            })?;
        self.parse(&content)
    }
}

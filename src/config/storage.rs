//! Storage backend selection

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where entries, drafts and moods live. Open wizards are always in memory.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    File,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Root directory of the YAML store
    pub data_dir: Option<PathBuf>,
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.backend == StorageBackend::File
            && self.data_dir.as_ref().map_or(true, |d| d.as_os_str().is_empty())
        {
            return Err(ValidationError::MissingDataDir);
        }
        Ok(())
    }
}

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Connection profile persisted between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardProfile {
    pub base_url: String,
    pub organization: String,
    pub project: String,
    pub token: String,
}

#[derive(Debug, Clone, Error)]
pub enum ConfigStoreError {
    #[error("Config version mismatch: found {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },
    #[error("Read error: {0}")]
    ReadError(String),
    #[error("Write error: {0}")]
    WriteError(String),
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

pub trait ConfigStore: Send + Sync {
    fn load(&self) -> Result<Option<DashboardProfile>, ConfigStoreError>;

    fn save(&self, profile: &DashboardProfile) -> Result<(), ConfigStoreError>;

    fn storage_path(&self) -> PathBuf;
}

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::app::ports::{ConfigStore, ConfigStoreError, DashboardProfile};

const CONFIG_FILE_NAME: &str = "config.toml";
pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct ConfigFile {
    version: u32,
    dashboard: DashboardProfile,
}

pub struct TomlConfigStore {
    config_dir: PathBuf,
}

impl TomlConfigStore {
    pub fn new() -> Result<Self, ConfigStoreError> {
        let config_base = dirs::config_dir()
            .ok_or_else(|| ConfigStoreError::ReadError("Could not find config directory".into()))?;
        Ok(Self {
            config_dir: config_base.join("hookdash"),
        })
    }

    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    fn config_file_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }
}

impl ConfigStore for TomlConfigStore {
    fn load(&self) -> Result<Option<DashboardProfile>, ConfigStoreError> {
        let path = self.config_file_path();

        if !path.exists() {
            return Ok(None);
        }

        let content =
            fs::read_to_string(&path).map_err(|e| ConfigStoreError::ReadError(e.to_string()))?;

        let config: ConfigFile =
            toml::from_str(&content).map_err(|e| ConfigStoreError::InvalidFormat(e.to_string()))?;

        if config.version != CURRENT_VERSION {
            return Err(ConfigStoreError::VersionMismatch {
                found: config.version,
                expected: CURRENT_VERSION,
            });
        }

        Ok(Some(config.dashboard))
    }

    fn save(&self, profile: &DashboardProfile) -> Result<(), ConfigStoreError> {
        if !self.config_dir.exists() {
            fs::create_dir_all(&self.config_dir)
                .map_err(|e| ConfigStoreError::WriteError(e.to_string()))?;
        }

        let config = ConfigFile {
            version: CURRENT_VERSION,
            dashboard: profile.clone(),
        };
        let content = toml::to_string_pretty(&config)
            .map_err(|e| ConfigStoreError::WriteError(e.to_string()))?;

        let content_with_header = format!(
            "# hookdash configuration\n# WARNING: API token is stored in plain text\n\n{}",
            content
        );

        let path = self.config_file_path();
        fs::write(&path, content_with_header)
            .map_err(|e| ConfigStoreError::WriteError(e.to_string()))?;

        set_file_permissions(&path)?;

        Ok(())
    }

    fn storage_path(&self) -> PathBuf {
        self.config_file_path()
    }
}

#[cfg(unix)]
fn set_file_permissions(path: &std::path::Path) -> Result<(), ConfigStoreError> {
    use std::os::unix::fs::PermissionsExt;
    let perms = fs::Permissions::from_mode(0o600);
    fs::set_permissions(path, perms).map_err(|e| ConfigStoreError::WriteError(e.to_string()))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_file_permissions(_path: &std::path::Path) -> Result<(), ConfigStoreError> {
    Ok(())
}

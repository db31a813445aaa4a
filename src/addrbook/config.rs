use crate::error::{AddrBookError, Result};
use crate::storage::fs::DEFAULT_FILE_NAME;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for addrbook, stored in `<home>/config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Data file; relative paths are resolved against the home directory
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Show `<private>` instead of private details in listings
    #[serde(default = "default_mask_private")]
    pub mask_private: bool,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_FILE_NAME)
}

fn default_mask_private() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            mask_private: default_mask_private(),
        }
    }
}

impl AppConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(AddrBookError::Io)?;
        let config: AppConfig =
            serde_json::from_str(&content).map_err(AddrBookError::Serialization)?;
        Ok(config)
    }

    /// The data file location, resolved against `home` when relative.
    pub fn data_path(&self, home: &Path) -> PathBuf {
        if self.data_file.is_absolute() {
            self.data_file.clone()
        } else {
            home.join(&self.data_file)
        }
    }
}

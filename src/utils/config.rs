use super::changelog::ChangelogConfig;
use crate::error::{Error, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "changelint.toml";

/// main configuration for changelint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelintConfig {
    /// changelog rule configuration
    #[serde(default)]
    pub changelog: ChangelogConfig,
}

impl ChangelintConfig {
    /// load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| Error::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: ChangelintConfig =
            toml::from_str(&contents).map_err(|e| Error::TomlParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// load `changelint.toml` from a directory, or the defaults if there is none
    ///
    /// a config file that exists but cannot be read or parsed is an error
    pub fn load_or_default<P: AsRef<Path>>(dir: P) -> Result<Self> {
        match Self::find_config_file(&dir) {
            Some(config_path) => Self::load_from_file(&config_path),
            None => {
                debug!(
                    "no {} in {}, using defaults",
                    CONFIG_FILE_NAME,
                    dir.as_ref().display()
                );
                Ok(Self::default())
            }
        }
    }

    /// find configuration file in a directory
    pub fn find_config_file<P: AsRef<Path>>(dir: P) -> Option<PathBuf> {
        let config_path = dir.as_ref().join(CONFIG_FILE_NAME);

        if config_path.is_file() {
            Some(config_path)
        } else {
            None
        }
    }

    /// path of the changelog inside `dir` according to this configuration
    pub fn changelog_path<P: AsRef<Path>>(&self, dir: P) -> PathBuf {
        dir.as_ref().join(&self.changelog.changelog_file_name)
    }
}

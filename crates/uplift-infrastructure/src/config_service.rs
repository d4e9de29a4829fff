//! Loads `config.toml`, writing the defaults on first run.

use std::path::PathBuf;

use uplift_core::config::AppConfig;
use uplift_core::{Result, UpliftError};

use crate::paths::UpliftPaths;
use crate::storage::AtomicTextFile;

pub struct ConfigService {
    paths: UpliftPaths,
}

impl ConfigService {
    pub fn new(paths: UpliftPaths) -> Self {
        Self { paths }
    }

    /// Reads the config file, creating it with defaults if it is missing.
    ///
    /// An empty file counts as missing. A file that exists but does not
    /// parse is an error rather than being overwritten.
    pub fn load_or_init(&self) -> Result<AppConfig> {
        let file = AtomicTextFile::new(self.paths.config_file()?);

        let content = file.load()?.filter(|c| !c.trim().is_empty());
        match content {
            Some(content) => toml::from_str(&content).map_err(|e| {
                UpliftError::config(format!(
                    "Failed to parse {}: {}",
                    file.path().display(),
                    e
                ))
            }),
            None => {
                let config = AppConfig::default();
                file.save(&toml::to_string_pretty(&config)?)?;
                tracing::info!(path = %file.path().display(), "Wrote default config");
                Ok(config)
            }
        }
    }

    /// Where persisted records live: the configured override, else the
    /// platform data directory.
    pub fn storage_dir(&self, config: &AppConfig) -> Result<PathBuf> {
        match &config.storage_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(self.paths.storage_dir()?),
        }
    }
}

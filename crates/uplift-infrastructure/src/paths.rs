//! Unified path management for UpliftED files.
//!
//! ```text
//! ~/.config/uplift/            # Config directory
//! ├── config.toml              # Application configuration
//! └── logs/                    # Application logs
//!     └── uplift.log.YYYY-MM-DD
//!
//! ~/.local/share/uplift/       # Data directory
//! └── storage/                 # Persisted records (one file per key)
//!     ├── user.json
//!     └── deadlines.json
//! ```
//!
//! Passing a base directory roots everything under it instead, which is how
//! tests keep their files inside a temp dir.

use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "uplift";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for uplift_core::UpliftError {
    fn from(err: PathError) -> Self {
        uplift_core::UpliftError::config(err.to_string())
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpliftPaths {
    base_dir: Option<PathBuf>,
}

impl UpliftPaths {
    /// Creates a resolver; `None` means the platform directories.
    pub fn new(base_dir: Option<&Path>) -> Self {
        Self {
            base_dir: base_dir.map(Path::to_path_buf),
        }
    }

    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base_dir {
            Some(base) => Ok(base.join("config")),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR_NAME))
                .ok_or(PathError::HomeDirNotFound),
        }
    }

    pub fn data_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base_dir {
            Some(base) => Ok(base.join("data")),
            None => dirs::data_dir()
                .map(|dir| dir.join(APP_DIR_NAME))
                .ok_or(PathError::HomeDirNotFound),
        }
    }

    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Directory holding the persisted records.
    pub fn storage_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.data_dir()?.join("storage"))
    }

    pub fn logs_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("logs"))
    }
}

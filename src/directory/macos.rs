//! macOS per-user directories.

use crate::env_lookup::EnvSource;
use crate::error::{DirectoryError, Result};
use crate::path_normalizer::normalize_posix;

#[derive(Debug, Clone, Default)]
pub struct MacOsDirectory {
    env: EnvSource,
}

impl MacOsDirectory {
    pub fn new(env: EnvSource) -> Self {
        Self { env }
    }

    /// Get the user's home directory.
    pub fn home_dir(&self) -> Result<String> {
        self.env
            .var("HOME")
            .ok_or_else(|| DirectoryError::resolution_failed("home", "environment variable HOME is not set"))
    }

    /// Get the application support directory.
    pub fn app_support_dir(&self) -> Result<String> {
        let home = self.home_dir()?;
        Ok(normalize_posix(&format!("{home}/Library/Application Support")))
    }

    pub fn config(&self) -> Result<String> {
        self.app_support_dir()
    }

    pub fn data(&self) -> Result<String> {
        self.app_support_dir()
    }
}

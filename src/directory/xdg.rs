//! XDG base directories for Linux and other Unix systems.
//!
//! `$XDG_CONFIG_HOME` and `$XDG_DATA_HOME` win when set to an absolute path;
//! relative values are ignored as the base-directory spec requires.

use crate::env_lookup::EnvSource;
use crate::error::{DirectoryError, Result};
use crate::path_normalizer::normalize_posix;

#[derive(Debug, Clone, Default)]
pub struct XdgDirectory {
    env: EnvSource,
}

impl XdgDirectory {
    pub fn new(env: EnvSource) -> Self {
        Self { env }
    }

    /// `$XDG_CONFIG_HOME`, else `$HOME/.config`.
    pub fn config(&self) -> Result<String> {
        self.base_dir("XDG_CONFIG_HOME", ".config")
    }

    /// `$XDG_DATA_HOME`, else `$HOME/.local/share`.
    pub fn data(&self) -> Result<String> {
        self.base_dir("XDG_DATA_HOME", ".local/share")
    }

    fn base_dir(&self, var: &str, home_relative: &str) -> Result<String> {
        if let Some(dir) = self.env.var(var).filter(|d| d.starts_with('/')) {
            return Ok(normalize_posix(&dir));
        }

        let home = self.env.var("HOME").ok_or_else(|| {
            DirectoryError::resolution_failed(var, "neither it nor HOME is set")
        })?;
        Ok(normalize_posix(&format!("{home}/{home_relative}")))
    }
}

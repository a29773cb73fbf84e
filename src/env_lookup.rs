//! Environment-variable fallback for Windows special folders.

use std::collections::HashMap;

use crate::error::{DirectoryError, Result};
use crate::folder_source::FolderLookup;
use crate::models::FolderId;
use crate::path_normalizer::join_windows;

/// Where environment variables are read from.
#[derive(Debug, Clone, Default)]
pub enum EnvSource {
    /// The current process environment.
    #[default]
    Process,
    /// A fixed set of variables.
    Fixed(HashMap<String, String>),
}

impl EnvSource {
    /// Build a fixed source from `(name, value)` pairs.
    pub fn fixed<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        EnvSource::Fixed(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    /// Value of `name`; unset and empty variables both read as `None`.
    pub fn var(&self, name: &str) -> Option<String> {
        let value = match self {
            EnvSource::Process => std::env::var(name).ok(),
            EnvSource::Fixed(vars) => vars.get(name).cloned(),
        };
        value.filter(|v| !v.is_empty())
    }
}

/// Resolves special folders from `APPDATA`, `LOCALAPPDATA` and friends.
#[derive(Debug, Clone, Default)]
pub struct EnvVarLookup {
    env: EnvSource,
}

impl EnvVarLookup {
    pub fn new(env: EnvSource) -> Self {
        Self { env }
    }

    fn require(&self, folder: FolderId, name: &str) -> Result<String> {
        self.env.var(name).ok_or_else(|| {
            DirectoryError::resolution_failed(
                folder.as_str(),
                format!("environment variable {name} is not set"),
            )
        })
    }
}

impl FolderLookup for EnvVarLookup {
    fn lookup(&self, folder: FolderId) -> Result<String> {
        let user_subfolder = match folder {
            FolderId::AppData => return self.require(folder, "APPDATA"),
            FolderId::CommonAppData => return self.require(folder, "ALLUSERSPROFILE"),
            FolderId::LocalAppData => return self.require(folder, "LOCALAPPDATA"),
            FolderId::Personal => "Documents",
            FolderId::MyPictures => "Pictures",
            FolderId::MyVideo => "Videos",
            FolderId::MyMusic => "Music",
            FolderId::Downloads => "Downloads",
            FolderId::DesktopDirectory => "Desktop",
        };

        let profile = self.require(folder, "USERPROFILE")?;
        Ok(join_windows(&profile, user_subfolder))
    }
}

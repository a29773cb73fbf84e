//! Windows special-folder resolution.
//!
//! Three tiers, picked by availability rather than by failure:
//! the native shell API, then the registry, then environment variables.

use std::fmt;

use crate::env_lookup::EnvVarLookup;
use crate::error::{DirectoryError, Result};
use crate::folder_source::{FolderLookup, ShellFolderApi};
use crate::models::FolderId;
use crate::path_normalizer::{join_windows, normalize_windows};
use crate::platform;

/// Highest code point a legacy (non-Unicode) consumer can handle.
const MAX_LEGACY_CODE_POINT: u32 = 255;

/// Which tier produced a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mechanism {
    Native,
    Registry,
    Environment,
}

impl Mechanism {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mechanism::Native => "native",
            Mechanism::Registry => "registry",
            Mechanism::Environment => "environment",
        }
    }
}

impl fmt::Display for Mechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a special-folder lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub folder: FolderId,
    pub path: String,
    pub mechanism: Mechanism,
    /// The path was replaced by its 8.3 short form.
    pub short_path: bool,
}

/// Resolves Windows special folders for the current user.
pub struct Win32Directory {
    shell: Option<Box<dyn ShellFolderApi>>,
    registry: Option<Box<dyn FolderLookup>>,
    env: Box<dyn FolderLookup>,
}

impl Win32Directory {
    /// Build a resolver from explicit collaborators. `None` marks a mechanism
    /// as unavailable on this host.
    pub fn new(
        shell: Option<Box<dyn ShellFolderApi>>,
        registry: Option<Box<dyn FolderLookup>>,
        env: Box<dyn FolderLookup>,
    ) -> Self {
        Self { shell, registry, env }
    }

    /// Resolver wired to whatever the host provides. Off Windows only the
    /// environment fallback is available.
    pub fn native() -> Self {
        Self::new(
            platform::native_shell(),
            platform::registry_lookup(),
            Box::new(EnvVarLookup::default()),
        )
    }

    /// The mechanism `resolve` will use.
    pub fn mechanism(&self) -> Mechanism {
        if self.shell.is_some() {
            Mechanism::Native
        } else if self.registry.is_some() {
            Mechanism::Registry
        } else {
            Mechanism::Environment
        }
    }

    /// Resolve a folder by CSIDL name (or alias).
    pub fn pick_get_win_folder(&self, csidl_name: &str) -> Result<String> {
        let folder = FolderId::from_name(csidl_name)?;
        Ok(self.resolve(folder)?.path)
    }

    /// Resolve a folder, reporting how the path was obtained. The path is
    /// normalized whichever tier produced it.
    pub fn resolve(&self, folder: FolderId) -> Result<Resolution> {
        let mut resolution = self.resolve_raw(folder)?;
        resolution.path = normalize_windows(&resolution.path);
        Ok(resolution)
    }

    fn resolve_raw(&self, folder: FolderId) -> Result<Resolution> {
        if let Some(shell) = &self.shell {
            return Self::resolve_native(shell.as_ref(), folder);
        }

        let (lookup, mechanism) = match &self.registry {
            Some(registry) => (registry.as_ref(), Mechanism::Registry),
            None => (self.env.as_ref(), Mechanism::Environment),
        };
        let path = lookup.lookup(folder)?;

        Ok(Resolution {
            folder,
            path,
            mechanism,
            short_path: false,
        })
    }

    /// Roaming application data.
    pub fn config(&self) -> Result<String> {
        Ok(self.resolve(FolderId::AppData)?.path)
    }

    /// Local application data.
    pub fn data(&self) -> Result<String> {
        Ok(self.resolve(FolderId::LocalAppData)?.path)
    }

    fn resolve_native(shell: &dyn ShellFolderApi, folder: FolderId) -> Result<Resolution> {
        let mut path = shell.folder_path(folder.csidl())?;
        if path.is_empty() {
            return Err(DirectoryError::resolution_failed(
                folder.as_str(),
                "shell returned an empty path",
            ));
        }

        let mut short_path = false;
        if has_high_code_points(&path) {
            if let Some(short) = shell.short_path_name(&path).filter(|s| !s.is_empty()) {
                path = short;
                short_path = true;
            }
        }

        // Older systems have no dedicated downloads constant.
        if folder == FolderId::Downloads {
            path = join_windows(&path, "Downloads");
        }

        Ok(Resolution {
            folder,
            path,
            mechanism: Mechanism::Native,
            short_path,
        })
    }
}

fn has_high_code_points(path: &str) -> bool {
    path.chars().any(|c| c as u32 > MAX_LEGACY_CODE_POINT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env_lookup::EnvSource;

    struct FixedShell(&'static str);

    impl ShellFolderApi for FixedShell {
        fn folder_path(&self, _csidl: i32) -> Result<String> {
            Ok(self.0.to_string())
        }

        fn short_path_name(&self, _path: &str) -> Option<String> {
            Some(r"C:\Users\ZHANGS~1".to_string())
        }
    }

    fn env_only() -> Win32Directory {
        Win32Directory::new(
            None,
            None,
            Box::new(EnvVarLookup::new(EnvSource::fixed([
                ("APPDATA", r"C:\Users\Alice\AppData\Roaming\"),
                ("LOCALAPPDATA", r"C:/Users/Alice/AppData/Local"),
            ]))),
        )
    }

    #[test]
    fn test_high_code_points() {
        assert!(!has_high_code_points(r"C:\Users\Zoë"));
        assert!(has_high_code_points(r"C:\Users\张三"));
    }

    #[test]
    fn test_mechanism_follows_availability() {
        assert_eq!(env_only().mechanism(), Mechanism::Environment);
        let dir = Win32Directory::new(Some(Box::new(FixedShell("C:\\"))), None, Box::new(EnvVarLookup::default()));
        assert_eq!(dir.mechanism(), Mechanism::Native);
    }

    #[test]
    fn test_latin1_path_is_not_shortened() {
        let dir = Win32Directory::new(
            Some(Box::new(FixedShell(r"C:\Users\Zoë"))),
            None,
            Box::new(EnvVarLookup::default()),
        );
        let resolution = dir.resolve(FolderId::Personal).unwrap();
        assert_eq!(resolution.path, r"C:\Users\Zoë");
        assert!(!resolution.short_path);
    }

    #[test]
    fn test_empty_native_path_is_an_error() {
        let dir = Win32Directory::new(Some(Box::new(FixedShell(""))), None, Box::new(EnvVarLookup::default()));
        assert!(matches!(
            dir.resolve(FolderId::AppData),
            Err(DirectoryError::ResolutionFailed { .. })
        ));
    }

    #[test]
    fn test_config_and_data_are_normalized() {
        let dir = env_only();
        assert_eq!(dir.config().unwrap(), r"C:\Users\Alice\AppData\Roaming");
        assert_eq!(dir.data().unwrap(), r"C:\Users\Alice\AppData\Local");
    }

    #[test]
    fn test_unknown_name_checked_before_lookup() {
        assert_eq!(
            env_only().pick_get_win_folder("CSIDL_WINDOWS"),
            Err(DirectoryError::InvalidArgument("CSIDL_WINDOWS".to_string()))
        );
    }
}

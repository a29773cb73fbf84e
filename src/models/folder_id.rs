//! Windows special-folder identifiers and their CSIDL codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DirectoryError;

/// Registry hive holding a folder's `Shell Folders` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryHive {
    CurrentUser,
    LocalMachine,
}

/// A special folder known to the legacy shell folder API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FolderId {
    /// Roaming application data
    #[serde(rename = "CSIDL_APPDATA", alias = "appdata")]
    AppData,
    /// Machine-wide application data
    #[serde(rename = "CSIDL_COMMON_APPDATA", alias = "common-appdata")]
    CommonAppData,
    /// Non-roaming application data
    #[serde(rename = "CSIDL_LOCAL_APPDATA", alias = "local-appdata")]
    LocalAppData,
    /// "My Documents"
    #[serde(rename = "CSIDL_PERSONAL", alias = "documents")]
    Personal,
    #[serde(rename = "CSIDL_MYPICTURES", alias = "pictures")]
    MyPictures,
    #[serde(rename = "CSIDL_MYVIDEO", alias = "videos")]
    MyVideo,
    #[serde(rename = "CSIDL_MYMUSIC", alias = "music")]
    MyMusic,
    /// Downloads. Resolved as a `Downloads` child of the code's base folder.
    #[serde(rename = "CSIDL_DOWNLOADS", alias = "downloads")]
    Downloads,
    #[serde(rename = "CSIDL_DESKTOPDIRECTORY", alias = "desktop")]
    DesktopDirectory,
}

impl FolderId {
    /// Every known folder, in table order.
    pub const ALL: [FolderId; 9] = [
        FolderId::AppData,
        FolderId::CommonAppData,
        FolderId::LocalAppData,
        FolderId::Personal,
        FolderId::MyPictures,
        FolderId::MyVideo,
        FolderId::MyMusic,
        FolderId::Downloads,
        FolderId::DesktopDirectory,
    ];

    /// The CSIDL constant passed to `SHGetFolderPathW`.
    pub fn csidl(&self) -> i32 {
        match self {
            FolderId::AppData => 26,
            FolderId::CommonAppData => 35,
            FolderId::LocalAppData => 28,
            FolderId::Personal => 5,
            FolderId::MyPictures => 39,
            FolderId::MyVideo => 14,
            FolderId::MyMusic => 13,
            FolderId::Downloads => 40,
            FolderId::DesktopDirectory => 16,
        }
    }

    /// Canonical CSIDL name.
    pub fn as_str(&self) -> &'static str {
        match self {
            FolderId::AppData => "CSIDL_APPDATA",
            FolderId::CommonAppData => "CSIDL_COMMON_APPDATA",
            FolderId::LocalAppData => "CSIDL_LOCAL_APPDATA",
            FolderId::Personal => "CSIDL_PERSONAL",
            FolderId::MyPictures => "CSIDL_MYPICTURES",
            FolderId::MyVideo => "CSIDL_MYVIDEO",
            FolderId::MyMusic => "CSIDL_MYMUSIC",
            FolderId::Downloads => "CSIDL_DOWNLOADS",
            FolderId::DesktopDirectory => "CSIDL_DESKTOPDIRECTORY",
        }
    }

    /// Short alias accepted on the command line.
    pub fn alias(&self) -> &'static str {
        match self {
            FolderId::AppData => "appdata",
            FolderId::CommonAppData => "common-appdata",
            FolderId::LocalAppData => "local-appdata",
            FolderId::Personal => "documents",
            FolderId::MyPictures => "pictures",
            FolderId::MyVideo => "videos",
            FolderId::MyMusic => "music",
            FolderId::Downloads => "downloads",
            FolderId::DesktopDirectory => "desktop",
        }
    }

    /// Value name under the `Explorer\Shell Folders` registry key.
    pub fn shell_folder_value(&self) -> &'static str {
        match self {
            FolderId::AppData => "AppData",
            FolderId::CommonAppData => "Common AppData",
            FolderId::LocalAppData => "Local AppData",
            FolderId::Personal => "Personal",
            FolderId::MyPictures => "My Pictures",
            FolderId::MyVideo => "My Video",
            FolderId::MyMusic => "My Music",
            FolderId::Downloads => "{374DE290-123F-4565-9164-39C4925E467B}",
            FolderId::DesktopDirectory => "Desktop",
        }
    }

    /// Machine-wide folders live under `HKLM`, per-user ones under `HKCU`.
    pub fn registry_hive(&self) -> RegistryHive {
        match self {
            FolderId::CommonAppData => RegistryHive::LocalMachine,
            _ => RegistryHive::CurrentUser,
        }
    }

    /// Look up a folder by CSIDL name or alias.
    pub fn from_name(name: &str) -> Result<Self, DirectoryError> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == name || id.alias() == name)
            .ok_or_else(|| DirectoryError::InvalidArgument(name.to_string()))
    }
}

impl FromStr for FolderId {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for FolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Per-user directory resolution, selected once per platform.

mod macos;
mod win32;
mod xdg;

pub use macos::MacOsDirectory;
pub use win32::{Mechanism, Resolution, Win32Directory};
pub use xdg::XdgDirectory;

use crate::env_lookup::EnvSource;
use crate::error::{DirectoryError, Result};
use crate::models::DirectoryKind;

/// Operating-system families with a known directory layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Unix,
    Other(&'static str),
}

impl Platform {
    /// Detect the current platform.
    pub fn current() -> Platform {
        #[cfg(target_os = "windows")]
        return Platform::Windows;

        #[cfg(target_os = "macos")]
        return Platform::MacOs;

        #[cfg(all(unix, not(target_os = "macos")))]
        return Platform::Unix;

        #[cfg(not(any(windows, unix)))]
        return Platform::Other(std::env::consts::OS);
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            Platform::Windows => "windows",
            Platform::MacOs => "macos",
            Platform::Unix => "unix",
            Platform::Other(name) => name,
        }
    }
}

/// Directory layout for the current user.
pub enum Directory {
    Win32(Win32Directory),
    MacOs(MacOsDirectory),
    Xdg(XdgDirectory),
}

impl Directory {
    /// Directory layout for the platform this process runs on.
    pub fn for_user() -> Result<Directory> {
        Self::for_platform(Platform::current())
    }

    /// Directory layout for `platform`, reading the process environment.
    pub fn for_platform(platform: Platform) -> Result<Directory> {
        match platform {
            Platform::Windows => Ok(Directory::Win32(Win32Directory::native())),
            Platform::MacOs => Ok(Directory::MacOs(MacOsDirectory::new(EnvSource::Process))),
            Platform::Unix => Ok(Directory::Xdg(XdgDirectory::new(EnvSource::Process))),
            Platform::Other(name) => Err(DirectoryError::UnsupportedPlatform(name.to_string())),
        }
    }

    /// The user's configuration directory.
    pub fn config(&self) -> Result<String> {
        match self {
            Directory::Win32(dir) => dir.config(),
            Directory::MacOs(dir) => dir.config(),
            Directory::Xdg(dir) => dir.config(),
        }
    }

    /// The user's application data directory.
    pub fn data(&self) -> Result<String> {
        match self {
            Directory::Win32(dir) => dir.data(),
            Directory::MacOs(dir) => dir.data(),
            Directory::Xdg(dir) => dir.data(),
        }
    }

    pub fn get(&self, kind: DirectoryKind) -> Result<String> {
        match kind {
            DirectoryKind::Config => self.config(),
            DirectoryKind::Data => self.data(),
        }
    }

    /// The Windows resolver, if this is the Windows layout.
    pub fn as_win32(&self) -> Option<&Win32Directory> {
        match self {
            Directory::Win32(dir) => Some(dir),
            _ => None,
        }
    }
}

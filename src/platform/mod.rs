//! Platform-specific functionality.
//!
//! Only Windows has native folder APIs; elsewhere the Win32 resolver falls
//! back to environment variables.

#[cfg(target_os = "windows")]
pub mod windows;

use crate::folder_source::{FolderLookup, ShellFolderApi};

/// The native shell folder API, when the host has one.
pub fn native_shell() -> Option<Box<dyn ShellFolderApi>> {
    #[cfg(target_os = "windows")]
    return Some(Box::new(self::windows::NativeShell));

    #[cfg(not(target_os = "windows"))]
    return None;
}

/// The registry-backed folder lookup, when the host has a registry.
pub fn registry_lookup() -> Option<Box<dyn FolderLookup>> {
    #[cfg(target_os = "windows")]
    return Some(Box::new(self::windows::RegistryLookup));

    #[cfg(not(target_os = "windows"))]
    return None;
}

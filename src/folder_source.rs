//! Collaborators the Win32 resolver reads folder paths from.
//!
//! The native implementations live in `platform::windows`; tests substitute
//! their own.

use crate::error::Result;
use crate::models::FolderId;

/// The native shell folder API (`shell32` / `kernel32`).
pub trait ShellFolderApi: Send + Sync {
    /// Path of the special folder identified by `csidl`.
    fn folder_path(&self, csidl: i32) -> Result<String>;

    /// Legacy 8.3 form of `path`, or `None` if the OS could not produce one.
    fn short_path_name(&self, path: &str) -> Option<String>;
}

/// A fallback lookup used when the native API is unavailable.
pub trait FolderLookup: Send + Sync {
    fn lookup(&self, folder: FolderId) -> Result<String>;
}

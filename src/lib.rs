//! userdirs library
//!
//! Resolves per-user platform directories, including Windows special folders
//! looked up by CSIDL name.

pub mod directory;
pub mod env_lookup;
pub mod error;
pub mod folder_source;
pub mod models;
pub mod path_normalizer;
pub mod platform;
pub mod reporter;

pub use directory::{Directory, Mechanism, Platform, Resolution, Win32Directory};
pub use error::{DirectoryError, Result};
pub use models::FolderId;

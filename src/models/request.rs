//! Batch resolution request loaded from a JSON file.

use serde::{Deserialize, Serialize};

use super::FolderId;

/// Which per-user directory to resolve through `Directory::for_user()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DirectoryKind {
    #[default]
    Config,
    Data,
}

impl DirectoryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectoryKind::Config => "config",
            DirectoryKind::Data => "data",
        }
    }
}

/// Contents of a `--request` file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveRequest {
    /// Windows special folders to resolve
    #[serde(default)]
    pub folders: Vec<FolderId>,

    /// Per-user directory to resolve when no folders are listed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<DirectoryKind>,
}

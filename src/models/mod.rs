//! Data models shared between the library and the CLI.
//! Folder identifiers and messages serialize to the JSON read by callers.

mod folder_id;
mod messages;
mod request;

pub use folder_id::*;
pub use messages::*;
pub use request::*;

//! Messages written to stdout by the CLI, one JSON object per line.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Messages sent from the CLI to whoever is reading stdout.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OutputMessage {
    /// A folder was resolved
    Resolved {
        folder: String,
        path: String,
    },

    /// Log message
    Log {
        level: LogLevel,
        message: String,
        timestamp: DateTime<Utc>,
    },

    /// Error message
    Error {
        message: String,
    },

    /// Run completion
    Complete {
        success: bool,
    },
}

impl OutputMessage {
    /// Create a resolved-path message.
    pub fn resolved(folder: &str, path: &str) -> Self {
        OutputMessage::Resolved {
            folder: folder.to_string(),
            path: path.to_string(),
        }
    }

    /// Create a log message stamped with the current time.
    pub fn log(level: LogLevel, message: &str) -> Self {
        OutputMessage::Log {
            level,
            message: message.to_string(),
            timestamp: Utc::now(),
        }
    }

    /// Create an error message.
    pub fn error(message: &str) -> Self {
        OutputMessage::Error {
            message: message.to_string(),
        }
    }

    /// Create a completion message.
    pub fn complete(success: bool) -> Self {
        OutputMessage::Complete { success }
    }
}

/// Log levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_message_serialization() {
        let msg = OutputMessage::resolved("CSIDL_APPDATA", r"C:\Users\Alice\AppData\Roaming");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"type\":\"resolved\""));
        assert!(json.contains("\"folder\":\"CSIDL_APPDATA\""));
    }

    #[test]
    fn test_log_message_serialization() {
        let msg = OutputMessage::log(LogLevel::Debug, "Test message");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"type\":\"log\""));
        assert!(json.contains("\"level\":\"debug\""));
        assert!(json.contains("\"timestamp\""));
    }

    #[test]
    fn test_complete_message_serialization() {
        let json = serde_json::to_string(&OutputMessage::complete(false)).unwrap();
        assert_eq!(json, r#"{"type":"complete","success":false}"#);
    }

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Warning < LogLevel::Error);
        assert_eq!(serde_json::to_string(&LogLevel::Warning).unwrap(), "\"warning\"");
    }
}

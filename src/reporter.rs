//! Result and log reporting via JSON lines.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use crate::models::{LogLevel, OutputMessage};

/// Thread-safe reporter that writes one JSON message per line.
#[derive(Clone)]
pub struct Reporter {
    inner: Arc<ReporterInner>,
}

struct ReporterInner {
    output: Mutex<Box<dyn Write + Send>>,
    min_level: LogLevel,
}

impl Reporter {
    /// Create a reporter that writes to stdout.
    pub fn new(min_level: LogLevel) -> Self {
        Self::to_writer(io::stdout(), min_level)
    }

    /// Create a reporter that writes to `writer`.
    pub fn to_writer(writer: impl Write + Send + 'static, min_level: LogLevel) -> Self {
        Self {
            inner: Arc::new(ReporterInner {
                output: Mutex::new(Box::new(writer)),
                min_level,
            }),
        }
    }

    /// Send a resolved path.
    pub fn send_resolved(&self, folder: &str, path: &str) {
        self.send_message(&OutputMessage::resolved(folder, path));
    }

    /// Send a log message; dropped when below the configured level.
    pub fn send_log(&self, level: LogLevel, message: &str) {
        if level < self.inner.min_level {
            return;
        }
        self.send_message(&OutputMessage::log(level, message));
    }

    /// Send an error message.
    pub fn send_error(&self, message: &str) {
        self.send_message(&OutputMessage::error(message));
    }

    /// Send a completion message.
    pub fn send_complete(&self, success: bool) {
        self.send_message(&OutputMessage::complete(success));
    }

    /// Send a raw message (thread-safe).
    fn send_message(&self, message: &OutputMessage) {
        let mut output = self
            .inner
            .output
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        match serde_json::to_string(message) {
            Ok(json) => {
                if let Err(e) = writeln!(output, "{}", json) {
                    eprintln!("Failed to write message: {}", e);
                }
                let _ = output.flush();
            }
            Err(e) => {
                eprintln!("Failed to serialize message: {}", e);
            }
        }
    }
}

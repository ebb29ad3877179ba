//! Notification port for user-facing messages.
//!
//! Informational messages and alerts are split so a terminal front end can
//! mark failures distinctly; both are mirrored into tracing.

use std::io::{self, Write};
use std::sync::Mutex;

use tracing::{info, warn};

pub trait Notifier: Send + Sync {
    fn info(&self, message: &str);
    fn alert(&self, message: &str);
}

/// Writes notifications as lines to a writer, stderr by default.
pub struct ConsoleNotifier<W: Write + Send = io::Stderr> {
    out: Mutex<W>,
}

impl ConsoleNotifier {
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> ConsoleNotifier<W> {
    pub fn new(out: W) -> Self {
        Self { out: Mutex::new(out) }
    }

    fn emit(&self, prefix: &str, message: &str) {
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        // A closed stderr leaves nowhere to report to.
        let _ = writeln!(out, "{prefix}{message}");
    }

    /// Consume the notifier and return the writer.
    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> Notifier for ConsoleNotifier<W> {
    fn info(&self, message: &str) {
        info!(message, "notify");
        self.emit("", message);
    }

    fn alert(&self, message: &str) {
        warn!(message, "notify: alert");
        self.emit("⚠️  ", message);
    }
}

#[cfg(test)]
#[path = "notify_test.rs"]
mod tests;

//! Leveled logging capability.
//!
//! The core performs no logging of its own - reporting is entirely the
//! collaborator's responsibility, consumed through the five-sink
//! [`Logger`] contract. [`TracingLogger`] adapts it onto the `tracing`
//! macros.

/// Five severity-leveled logging sinks.
pub trait Logger {
    /// Diagnostic detail, usually suppressed.
    fn debug(&self, message: &str);

    /// Routine progress.
    fn info(&self, message: &str);

    /// Noteworthy but non-warning information.
    fn notice(&self, message: &str);

    /// A recoverable problem.
    fn warning(&self, message: &str);

    /// A failure.
    fn error(&self, message: &str);

    /// Logs an error value at warning level.
    fn warning_error(&self, error: &dyn std::error::Error) {
        self.warning(&error.to_string());
    }

    /// Logs an error value at error level.
    fn error_cause(&self, error: &dyn std::error::Error) {
        self.error(&error.to_string());
    }
}

/// A [`Logger`] emitting through the `tracing` macros.
///
/// `tracing` has no notice level; `notice` emits at info level carrying a
/// `notice = true` field.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl TracingLogger {
    /// Creates the adapter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn debug(&self, message: &str) {
        tracing::debug!("{message}");
    }

    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn notice(&self, message: &str) {
        tracing::info!(notice = true, "{message}");
    }

    fn warning(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}

//! Request logging sink for the Emergency Reporting client.
//!
//! The transport core and the token flows report what they send and receive through a
//! [`RequestLogger`]. A logger is a pure observer: nothing it does can change the outcome
//! of a request.

use std::fmt;
use std::sync::Arc;

/// Capability for observing outbound requests.
pub trait RequestLogger: Send + Sync {
    fn log(&self, message: fmt::Arguments<'_>);
}

/// Forwards every message to `tracing` at debug level.
///
/// The binary's subscriber writes these to standard error when `--verbose` is given.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultLogger;

impl RequestLogger for DefaultLogger {
    fn log(&self, message: fmt::Arguments<'_>) {
        tracing::debug!(target: "ercli::request", "{}", message);
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLogger;

impl RequestLogger for NullLogger {
    fn log(&self, _message: fmt::Arguments<'_>) {}
}

pub fn default_logger() -> Arc<dyn RequestLogger> {
    Arc::new(DefaultLogger)
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingLogger;
    use super::*;

    #[test]
    fn test_null_logger_accepts_messages() {
        let logger = NullLogger;
        logger.log(format_args!("GET {}", "https://example.com"));
    }

    #[test]
    fn test_recording_logger_keeps_order() {
        let logger = RecordingLogger::default();
        logger.log(format_args!("first {}", 1));
        logger.log(format_args!("second {}", 2));
        assert_eq!(logger.lines(), vec!["first 1".to_string(), "second 2".to_string()]);
    }
}

//! No-operation logger implementation.

use crate::logger::{Level, Logger, MessageProducer};
use std::error::Error;

/// A logger that reports every level disabled and discards all messages.
///
/// Useful for:
/// - Degraded operation when no logging backend is installed
/// - Unit tests where log output would be noise
/// - Benchmarks where logging overhead should be eliminated
///
/// Because every level is disabled, message producers handed to this logger
/// are never invoked.
///
/// # Example
///
/// ```
/// use logport::{Logger, NoOpLogger};
/// use std::sync::Arc;
///
/// let logger: Arc<dyn Logger> = Arc::new(NoOpLogger);
/// let written = logger.write(logport::Level::Info, Some(&|| "discarded".to_string()));
/// assert!(!written);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl Logger for NoOpLogger {
    #[inline]
    fn write(&self, _level: Level, _producer: Option<MessageProducer<'_>>) -> bool {
        false
    }

    #[inline]
    fn write_with_error(
        &self,
        _level: Level,
        _producer: Option<MessageProducer<'_>>,
        _error: &dyn Error,
    ) {
        // Intentionally empty - discard all log messages
    }
}

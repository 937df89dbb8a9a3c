//! Panic containment for message producers.
//!
//! Message producers are arbitrary caller closures, so a write must survive
//! a producer that panics. [`PanicSafeLogger`] decorates any [`Logger`] and
//! converts a producer panic into a fallback record on the wrapped logger;
//! the panic never unwinds into the call site.

use crate::logger::{Level, Logger, MessageProducer};
use std::any::Any;
use std::error::Error as StdError;
use std::panic::{self, AssertUnwindSafe};
use thiserror::Error;

/// Message of the fallback record emitted when a producer panics.
const FALLBACK_MESSAGE: &str = "Failed to generate log message";

/// Error attached to the fallback record when a message producer panics.
///
/// Backends receive this through `write_with_error` like any other error, so
/// the panic payload survives into whatever output the backend renders.
#[derive(Debug, Error)]
#[error("message producer panicked: {0}")]
pub struct ProducerPanic(String);

impl ProducerPanic {
    fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        Self(panic_message(payload.as_ref()))
    }

    /// Returns the rendered panic payload.
    pub fn payload(&self) -> &str {
        &self.0
    }
}

/// Renders a panic payload into a human-readable message.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        String::from("opaque panic payload")
    }
}

/// Decorator that keeps producer panics out of application control flow.
///
/// Wraps every producer invocation in a panic guard. When a producer panics,
/// the wrapper emits one error-level fallback record carrying the panic as a
/// [`ProducerPanic`], and the interrupted write completes with an empty
/// message. Enablement queries pass through untouched.
///
/// # Example
///
/// ```
/// use logport::{Level, Logger, NoOpLogger, PanicSafeLogger};
///
/// let logger = PanicSafeLogger::new(Box::new(NoOpLogger));
/// let written = logger.write(Level::Info, Some(&|| "guarded".to_string()));
/// assert!(!written);
/// ```
pub struct PanicSafeLogger {
    inner: Box<dyn Logger>,
}

impl PanicSafeLogger {
    /// Wraps `inner` so that producer panics cannot escape a write.
    pub fn new(inner: Box<dyn Logger>) -> Self {
        Self { inner }
    }

    /// Invokes `producer` under a panic guard.
    ///
    /// On panic, emits the fallback record through this wrapper and returns
    /// an empty message so the interrupted write can still complete. The
    /// recursion is bounded: the fallback producer is a constant and cannot
    /// itself panic.
    fn produce(&self, producer: MessageProducer<'_>) -> String {
        match panic::catch_unwind(AssertUnwindSafe(|| producer())) {
            Ok(message) => message,
            Err(payload) => {
                let caught = ProducerPanic::from_payload(payload);
                let fallback = || FALLBACK_MESSAGE.to_string();
                self.write_with_error(Level::Error, Some(&fallback), &caught);
                String::new()
            }
        }
    }
}

impl Logger for PanicSafeLogger {
    fn write(&self, level: Level, producer: Option<MessageProducer<'_>>) -> bool {
        match producer {
            None => self.inner.write(level, None),
            Some(producer) => {
                let guarded = || self.produce(producer);
                self.inner.write(level, Some(&guarded))
            }
        }
    }

    fn write_with_error(
        &self,
        level: Level,
        producer: Option<MessageProducer<'_>>,
        error: &dyn StdError,
    ) {
        match producer {
            None => self.inner.write_with_error(level, None, error),
            Some(producer) => {
                let guarded = || self.produce(producer);
                self.inner.write_with_error(level, Some(&guarded), error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::RecordingLogger;
    use std::io;
    use std::sync::Arc;

    fn wrapped(threshold: Level) -> (Arc<RecordingLogger>, PanicSafeLogger) {
        let inner = Arc::new(RecordingLogger::enabled_from(threshold));
        let logger = PanicSafeLogger::new(Box::new(Arc::clone(&inner)));
        (inner, logger)
    }

    #[test]
    fn test_panic_safe_logger_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PanicSafeLogger>();
    }

    #[test]
    fn test_passthrough_when_producer_succeeds() {
        let (inner, logger) = wrapped(Level::Trace);
        assert!(logger.write(Level::Info, Some(&|| "hello".to_string())));
        assert_eq!(inner.writes(), vec![(Level::Info, "hello".to_string())]);
        assert!(inner.error_writes().is_empty());
    }

    #[test]
    fn test_enablement_query_passes_through() {
        let (_, logger) = wrapped(Level::Warn);
        assert!(!logger.write(Level::Debug, None));
        assert!(logger.write(Level::Error, None));
    }

    #[test]
    fn test_error_write_without_producer_passes_through() {
        let (inner, logger) = wrapped(Level::Trace);
        let error = io::Error::new(io::ErrorKind::Other, "disk offline");
        logger.write_with_error(Level::Error, None, &error);
        // Nothing to guard and nothing to report.
        assert!(inner.error_writes().is_empty());
        assert_eq!(inner.error_write_calls(), 1);
    }

    #[test]
    fn test_producer_panic_does_not_unwind() {
        let (inner, logger) = wrapped(Level::Trace);
        let written = logger.write(Level::Info, Some(&|| panic!("producer exploded")));
        assert!(written);
        // The interrupted write completes with an empty message.
        assert_eq!(inner.writes(), vec![(Level::Info, String::new())]);
    }

    #[test]
    fn test_producer_panic_emits_one_fallback_record() {
        let (inner, logger) = wrapped(Level::Trace);
        logger.write(Level::Debug, Some(&|| panic!("producer exploded")));
        let errors = inner.error_writes();
        assert_eq!(errors.len(), 1);
        let (level, message, error) = &errors[0];
        assert_eq!(*level, Level::Error);
        assert_eq!(message, FALLBACK_MESSAGE);
        assert_eq!(error, "message producer panicked: producer exploded");
    }

    #[test]
    fn test_producer_panic_with_string_payload() {
        let (inner, logger) = wrapped(Level::Trace);
        let detail = "code 57";
        logger.write(Level::Info, Some(&|| panic!("lookup failed: {}", detail)));
        let errors = inner.error_writes();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].2.contains("lookup failed: code 57"));
    }

    #[test]
    fn test_error_write_producer_panic_delivers_both_records() {
        let (inner, logger) = wrapped(Level::Trace);
        let original = io::Error::new(io::ErrorKind::Other, "disk offline");
        logger.write_with_error(Level::Warn, Some(&|| panic!("render failed")), &original);

        let errors = inner.error_writes();
        assert_eq!(errors.len(), 2);
        // Fallback first: it is emitted while the producer is being evaluated.
        assert_eq!(errors[0].0, Level::Error);
        assert_eq!(errors[0].1, FALLBACK_MESSAGE);
        // The original error write still lands, with an empty message.
        assert_eq!(errors[1].0, Level::Warn);
        assert_eq!(errors[1].1, "");
        assert_eq!(errors[1].2, "disk offline");
    }

    #[test]
    fn test_disabled_level_never_reaches_producer() {
        let (inner, logger) = wrapped(Level::Error);
        let written = logger.write(Level::Debug, Some(&|| panic!("should not run")));
        assert!(!written);
        assert!(inner.writes().is_empty());
        assert!(inner.error_writes().is_empty());
    }

    #[test]
    fn test_panic_message_rendering() {
        let as_str: Box<dyn Any + Send> = Box::new("plain payload");
        assert_eq!(panic_message(as_str.as_ref()), "plain payload");

        let as_string: Box<dyn Any + Send> = Box::new(String::from("owned payload"));
        assert_eq!(panic_message(as_string.as_ref()), "owned payload");

        let opaque: Box<dyn Any + Send> = Box::new(57u32);
        assert_eq!(panic_message(opaque.as_ref()), "opaque panic payload");
    }

    #[test]
    fn test_producer_panic_display() {
        let panic = ProducerPanic(String::from("boom"));
        assert_eq!(panic.to_string(), "message producer panicked: boom");
        assert_eq!(panic.payload(), "boom");
    }
}

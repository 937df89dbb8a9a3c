//! Logger trait definition.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Log level for filtering messages.
///
/// Declaration order is severity order: `Trace` is the most verbose level
/// and `Fatal` the most severe, so levels compare with `<` and `>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Verbose debugging information
    Trace,
    /// Debugging information
    Debug,
    /// General information
    Info,
    /// Warning messages
    Warn,
    /// Error messages
    Error,
    /// Unrecoverable failures
    Fatal,
}

impl Level {
    /// Returns the upper-case level name used in rendered output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lazily-evaluated message producer.
///
/// A producer is invoked at most once per write, and only after the level
/// gate has passed, so disabled levels never pay for message rendering.
pub type MessageProducer<'a> = &'a dyn Fn() -> String;

/// Logging interface for pluggable backends.
///
/// This trait is the single seam between call sites and whatever logging
/// framework is active in the host process. Passing `None` as the producer
/// turns a write into a pure enablement query.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across threads.
///
/// # Example
///
/// ```
/// use logport::{Logger, NoOpLogger};
/// use std::sync::Arc;
///
/// let logger: Arc<dyn Logger> = Arc::new(NoOpLogger);
/// logport::log_info!(logger, "Application started");
/// ```
pub trait Logger: Send + Sync {
    /// Logs the produced message at the specified level.
    ///
    /// With `Some(producer)`, the producer is invoked only when `level` is
    /// enabled and the resulting message is written. With `None`, nothing is
    /// written and the return value reports whether `level` is enabled.
    ///
    /// # Returns
    ///
    /// `true` when `level` is enabled for this logger.
    fn write(&self, level: Level, producer: Option<MessageProducer<'_>>) -> bool;

    /// Logs the produced message at the specified level with `error` attached.
    ///
    /// The error travels alongside the message so backends can render it with
    /// their own conventions (structured fields, cause chains). With `None`
    /// as the producer this is a no-op.
    fn write_with_error(
        &self,
        level: Level,
        producer: Option<MessageProducer<'_>>,
        error: &dyn Error,
    );
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn write(&self, level: Level, producer: Option<MessageProducer<'_>>) -> bool {
        (**self).write(level, producer)
    }

    fn write_with_error(
        &self,
        level: Level,
        producer: Option<MessageProducer<'_>>,
        error: &dyn Error,
    ) {
        (**self).write_with_error(level, producer, error)
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn write(&self, level: Level, producer: Option<MessageProducer<'_>>) -> bool {
        (**self).write(level, producer)
    }

    fn write_with_error(
        &self,
        level: Level,
        producer: Option<MessageProducer<'_>>,
        error: &dyn Error,
    ) {
        (**self).write_with_error(level, producer, error)
    }
}

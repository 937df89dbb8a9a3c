//! Tracing library adapter implementation.

use super::types::Provider;
use crate::logger::{Level, Logger, MessageProducer};
use std::error::Error;
use tracing_core::subscriber::NoSubscriber;

/// Target under which all records are emitted.
///
/// Callsite metadata in `tracing` is static, so the logical logger name
/// cannot become the event target; it travels in the `logger` field instead.
const TARGET: &str = "logport";

/// Provider for processes that run a `tracing` dispatcher.
///
/// Availability means a real dispatcher is reachable from the probing
/// thread, either the global default or a scoped one. The probe only reads
/// dispatcher state; it never installs or modifies anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingProvider;

impl TracingProvider {
    /// Create a new tracing provider.
    pub fn new() -> Self {
        Self
    }
}

impl Provider for TracingProvider {
    fn name(&self) -> &str {
        "tracing"
    }

    fn is_available(&self) -> bool {
        tracing_core::dispatcher::get_default(|dispatch| !dispatch.is::<NoSubscriber>())
    }

    fn get_logger(&self, name: &str) -> Box<dyn Logger> {
        Box::new(TracingLogger::new(name))
    }
}

/// Logger implementation that delegates to the `tracing` crate.
///
/// Enablement questions are answered by the active dispatcher through the
/// `tracing::enabled!` macro, so subscriber filtering (max level, per-target
/// directives) is honored. `tracing` has no fatal level; fatal records are
/// emitted at ERROR.
///
/// # Example
///
/// ```ignore
/// use logport::provider::TracingLogger;
///
/// // Assumes a tracing subscriber is already installed
/// let logger = TracingLogger::new("app::startup");
/// logger.write(logport::Level::Info, Some(&|| "Using tracing backend".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct TracingLogger {
    name: String,
}

impl TracingLogger {
    /// Create a tracing logger bound to `name`.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    fn enabled(&self, level: Level) -> bool {
        match level {
            Level::Trace => tracing::enabled!(target: TARGET, tracing::Level::TRACE),
            Level::Debug => tracing::enabled!(target: TARGET, tracing::Level::DEBUG),
            Level::Info => tracing::enabled!(target: TARGET, tracing::Level::INFO),
            Level::Warn => tracing::enabled!(target: TARGET, tracing::Level::WARN),
            Level::Error | Level::Fatal => {
                tracing::enabled!(target: TARGET, tracing::Level::ERROR)
            }
        }
    }

    fn emit(&self, level: Level, message: &str) {
        let logger = self.name.as_str();
        match level {
            Level::Trace => tracing::trace!(target: TARGET, logger, "{}", message),
            Level::Debug => tracing::debug!(target: TARGET, logger, "{}", message),
            Level::Info => tracing::info!(target: TARGET, logger, "{}", message),
            Level::Warn => tracing::warn!(target: TARGET, logger, "{}", message),
            Level::Error | Level::Fatal => {
                tracing::error!(target: TARGET, logger, "{}", message)
            }
        }
    }

    fn emit_with_error(&self, level: Level, message: &str, error: &dyn Error) {
        let logger = self.name.as_str();
        match level {
            Level::Trace => {
                tracing::trace!(target: TARGET, logger, error = %error, "{}", message)
            }
            Level::Debug => {
                tracing::debug!(target: TARGET, logger, error = %error, "{}", message)
            }
            Level::Info => {
                tracing::info!(target: TARGET, logger, error = %error, "{}", message)
            }
            Level::Warn => {
                tracing::warn!(target: TARGET, logger, error = %error, "{}", message)
            }
            Level::Error | Level::Fatal => {
                tracing::error!(target: TARGET, logger, error = %error, "{}", message)
            }
        }
    }
}

impl Logger for TracingLogger {
    fn write(&self, level: Level, producer: Option<MessageProducer<'_>>) -> bool {
        let enabled = self.enabled(level);
        match producer {
            None => enabled,
            Some(producer) => {
                if enabled {
                    self.emit(level, &producer());
                }
                enabled
            }
        }
    }

    fn write_with_error(
        &self,
        level: Level,
        producer: Option<MessageProducer<'_>>,
        error: &dyn Error,
    ) {
        if let Some(producer) = producer {
            if self.enabled(level) {
                self.emit_with_error(level, &producer(), error);
            }
        }
    }
}

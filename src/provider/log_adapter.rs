//! Log crate adapter implementation.

use super::types::Provider;
use crate::logger::{Level, Logger, MessageProducer};
use std::error::Error;

/// Provider for processes that route records through the `log` facade.
///
/// Availability means the global max level has been raised above `Off`,
/// which is how `log`-based setups (`env_logger`, `simple_logger`, ...)
/// announce themselves. A process that installed a logger but left the max
/// level at `Off` would drop every record anyway, so it counts as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogCrateProvider;

impl LogCrateProvider {
    /// Create a new log crate provider.
    pub fn new() -> Self {
        Self
    }
}

impl Provider for LogCrateProvider {
    fn name(&self) -> &str {
        "log"
    }

    fn is_available(&self) -> bool {
        log::max_level() != log::LevelFilter::Off
    }

    fn get_logger(&self, name: &str) -> Box<dyn Logger> {
        Box::new(LogCrateLogger::new(name))
    }
}

/// Maps a facade level onto the `log` crate's levels.
///
/// `log` has no fatal level; fatal records are emitted at `Error`.
fn map_level(level: Level) -> log::Level {
    match level {
        Level::Trace => log::Level::Trace,
        Level::Debug => log::Level::Debug,
        Level::Info => log::Level::Info,
        Level::Warn => log::Level::Warn,
        Level::Error | Level::Fatal => log::Level::Error,
    }
}

/// Appends an error and its cause chain to a message.
fn render_with_error(message: &str, error: &dyn Error) -> String {
    let mut rendered = format!("{}: {}", message, error);
    let mut source = error.source();
    while let Some(cause) = source {
        rendered.push_str(&format!(" (caused by: {})", cause));
        source = cause.source();
    }
    rendered
}

/// Logger implementation that delegates to the `log` crate.
///
/// The logical logger name becomes the record target, so `log` filtering by
/// target keeps working. Attached errors are folded into the message text
/// together with their cause chain, since `log` records carry no structured
/// error slot.
#[derive(Debug, Clone)]
pub struct LogCrateLogger {
    name: String,
}

impl LogCrateLogger {
    /// Create a log crate logger bound to `name`.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    fn enabled(&self, level: Level) -> bool {
        let mapped = map_level(level);
        if mapped > log::max_level() {
            return false;
        }
        let metadata = log::Metadata::builder()
            .level(mapped)
            .target(&self.name)
            .build();
        log::logger().enabled(&metadata)
    }

    fn emit(&self, level: Level, message: &str) {
        log::logger().log(
            &log::Record::builder()
                .args(format_args!("{}", message))
                .level(map_level(level))
                .target(&self.name)
                .build(),
        );
    }
}

impl Logger for LogCrateLogger {
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
                self.emit(level, &render_with_error(&producer(), error));
            }
        }
    }
}

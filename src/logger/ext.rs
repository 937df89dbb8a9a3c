//! Per-level convenience surface for [`Logger`].

use crate::logger::{Level, Logger};
use std::error::Error;
use std::fmt::Arguments;

/// Per-level convenience methods for any [`Logger`].
///
/// This trait is blanket-implemented for every `Logger`, including trait
/// objects, so importing it is all that is needed. Each level gets the same
/// four operations: an enablement check, a plain message write, a deferred
/// format write, and a write with an attached error.
///
/// Plain and format writes short-circuit on a disabled level before any
/// rendering work. Error writes skip the pre-check and always reach the
/// logger; whether to drop them is the backend's call.
///
/// # Example
///
/// ```
/// use logport::{LoggerExt, NoOpLogger};
///
/// let logger = NoOpLogger;
/// if logger.is_debug_enabled() {
///     logger.debug("never reached: every level is disabled");
/// }
/// logger.warn("also gated off");
/// ```
pub trait LoggerExt: Logger {
    /// Returns whether `level` is enabled for this logger.
    fn is_enabled(&self, level: Level) -> bool {
        self.write(level, None)
    }

    /// Writes `message` at `level` if the level is enabled.
    fn log(&self, level: Level, message: &str) {
        if self.is_enabled(level) {
            self.write(level, Some(&|| message.to_string()));
        }
    }

    /// Writes pre-formatted arguments at `level` if the level is enabled.
    ///
    /// Rendering happens after the gate, so a disabled level costs one
    /// enablement check and nothing more.
    fn log_format(&self, level: Level, args: Arguments<'_>) {
        if self.is_enabled(level) {
            self.write(level, Some(&|| args.to_string()));
        }
    }

    /// Writes `message` at `level` with `error` attached.
    fn log_error(&self, level: Level, message: &str, error: &dyn Error) {
        self.write_with_error(level, Some(&|| message.to_string()), error);
    }

    /// Returns whether trace-level output is enabled.
    fn is_trace_enabled(&self) -> bool {
        self.is_enabled(Level::Trace)
    }

    /// Writes a trace-level message.
    fn trace(&self, message: &str) {
        self.log(Level::Trace, message);
    }

    /// Writes trace-level pre-formatted arguments.
    fn trace_format(&self, args: Arguments<'_>) {
        self.log_format(Level::Trace, args);
    }

    /// Writes a trace-level message with an attached error.
    fn trace_error(&self, message: &str, error: &dyn Error) {
        self.log_error(Level::Trace, message, error);
    }

    /// Returns whether debug-level output is enabled.
    fn is_debug_enabled(&self) -> bool {
        self.is_enabled(Level::Debug)
    }

    /// Writes a debug-level message.
    fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }

    /// Writes debug-level pre-formatted arguments.
    fn debug_format(&self, args: Arguments<'_>) {
        self.log_format(Level::Debug, args);
    }

    /// Writes a debug-level message with an attached error.
    fn debug_error(&self, message: &str, error: &dyn Error) {
        self.log_error(Level::Debug, message, error);
    }

    /// Returns whether info-level output is enabled.
    fn is_info_enabled(&self) -> bool {
        self.is_enabled(Level::Info)
    }

    /// Writes an info-level message.
    fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    /// Writes info-level pre-formatted arguments.
    fn info_format(&self, args: Arguments<'_>) {
        self.log_format(Level::Info, args);
    }

    /// Writes an info-level message with an attached error.
    fn info_error(&self, message: &str, error: &dyn Error) {
        self.log_error(Level::Info, message, error);
    }

    /// Returns whether warn-level output is enabled.
    fn is_warn_enabled(&self) -> bool {
        self.is_enabled(Level::Warn)
    }

    /// Writes a warning message.
    fn warn(&self, message: &str) {
        self.log(Level::Warn, message);
    }

    /// Writes warning-level pre-formatted arguments.
    fn warn_format(&self, args: Arguments<'_>) {
        self.log_format(Level::Warn, args);
    }

    /// Writes a warning message with an attached error.
    fn warn_error(&self, message: &str, error: &dyn Error) {
        self.log_error(Level::Warn, message, error);
    }

    /// Returns whether error-level output is enabled.
    fn is_error_enabled(&self) -> bool {
        self.is_enabled(Level::Error)
    }

    /// Writes an error-level message.
    fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }

    /// Writes error-level pre-formatted arguments.
    fn error_format(&self, args: Arguments<'_>) {
        self.log_format(Level::Error, args);
    }

    /// Writes an error-level message with an attached error.
    fn error_error(&self, message: &str, error: &dyn Error) {
        self.log_error(Level::Error, message, error);
    }

    /// Returns whether fatal-level output is enabled.
    fn is_fatal_enabled(&self) -> bool {
        self.is_enabled(Level::Fatal)
    }

    /// Writes a fatal-level message.
    fn fatal(&self, message: &str) {
        self.log(Level::Fatal, message);
    }

    /// Writes fatal-level pre-formatted arguments.
    fn fatal_format(&self, args: Arguments<'_>) {
        self.log_format(Level::Fatal, args);
    }

    /// Writes a fatal-level message with an attached error.
    fn fatal_error(&self, message: &str, error: &dyn Error) {
        self.log_error(Level::Fatal, message, error);
    }
}

impl<T: Logger + ?Sized> LoggerExt for T {}

/// Convenience macros for logging with format strings.
///
/// Each macro expands to a deferred format write, so the format arguments
/// are only rendered when the level is enabled. No trait import is needed
/// at the call site.
#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::LoggerExt as _;
        $logger.trace_format(format_args!($($arg)*))
    }};
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::LoggerExt as _;
        $logger.debug_format(format_args!($($arg)*))
    }};
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::LoggerExt as _;
        $logger.info_format(format_args!($($arg)*))
    }};
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::LoggerExt as _;
        $logger.warn_format(format_args!($($arg)*))
    }};
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::LoggerExt as _;
        $logger.error_format(format_args!($($arg)*))
    }};
}

#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::LoggerExt as _;
        $logger.fatal_format(format_args!($($arg)*))
    }};
}

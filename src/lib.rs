//! LogPort - Pluggable logging facade with runtime backend discovery
//!
//! This library lets components log without hard-wiring a logging framework.
//! Call sites write against the [`Logger`] trait; at runtime a
//! [`LoggerFactory`] probes which backend the host process actually runs
//! (a `tracing` dispatcher, the `log` facade) and binds every logger it
//! hands out to the first match. A process with no backend gets silent
//! no-op loggers instead of failures: logging never takes the caller down.
//!
//! # High-Level API
//!
//! ```
//! use logport::{LoggerExt, LoggerFactory};
//!
//! let factory = LoggerFactory::new();
//! let logger = factory.get_logger("app::startup");
//!
//! logport::log_info!(logger, "listening on port {}", 8080);
//!
//! if logger.is_debug_enabled() {
//!     logger.debug("verbose diagnostics enabled");
//! }
//! ```
//!
//! Messages are produced lazily: a level that the backend keeps disabled
//! never pays for formatting. Producers run under a panic guard, so a
//! misbehaving format expression degrades into a fallback record instead of
//! unwinding through the caller.

pub mod logger;
pub mod provider;

pub use logger::{
    Level, Logger, LoggerExt, MessageProducer, NoOpLogger, PanicSafeLogger, ProducerPanic,
};
#[cfg(feature = "backend-log")]
pub use provider::LogCrateProvider;
#[cfg(feature = "backend-tracing")]
pub use provider::TracingProvider;
pub use provider::{LoggerFactory, Provider};

/// Version of the LogPort library.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

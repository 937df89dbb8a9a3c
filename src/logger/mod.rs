//! Logging abstraction layer.
//!
//! This module provides the logging interface that decouples call sites from
//! whatever logging framework is active in the host process. Components log
//! against the [`Logger`] trait; which backend actually receives the records
//! is decided elsewhere, at runtime.
//!
//! # Architecture
//!
//! - `Logger` trait: level-gated writes with lazily-evaluated messages
//! - `LoggerExt` trait: per-level convenience methods over any `Logger`
//! - `PanicSafeLogger`: decorator that contains message-producer panics
//! - `NoOpLogger`: silent logger for degraded operation and testing
//!
//! # Usage
//!
//! Components that need logging should accept a `Box<dyn Logger>` or
//! `Arc<dyn Logger>` and use the provided macros:
//!
//! ```
//! use logport::Logger;
//! use std::sync::Arc;
//!
//! struct MyComponent {
//!     logger: Arc<dyn Logger>,
//! }
//!
//! impl MyComponent {
//!     fn new(logger: Arc<dyn Logger>) -> Self {
//!         Self { logger }
//!     }
//!
//!     fn do_work(&self) {
//!         logport::log_info!(self.logger, "Starting work");
//!         // ... do work ...
//!         logport::log_debug!(self.logger, "Work completed");
//!     }
//! }
//! ```
//!
//! # Benefits
//!
//! - **Laziness**: disabled levels never render their messages
//! - **Isolation**: a panicking message producer cannot take the caller down
//! - **Decoupling**: no hard dependency on any logging framework at call sites

mod ext;
mod noop;
mod panic_guard;
mod r#trait;

pub use ext::LoggerExt;
pub use noop::NoOpLogger;
pub use panic_guard::{PanicSafeLogger, ProducerPanic};
pub use r#trait::{Level, Logger, MessageProducer};

pub(crate) use panic_guard::panic_message;

#[cfg(test)]
pub use r#trait::tests::RecordingLogger;

//! Backend provider layer.
//!
//! A provider wraps one logging framework the host process might run and
//! answers two questions: is that framework present right now, and how do
//! we get a logger bound to it. The [`LoggerFactory`] walks the available
//! providers at runtime and binds the process to the first match, so call
//! sites above this module never reference a concrete backend.
//!
//! # Providers
//!
//! - [`TracingProvider`] - delegates to a live `tracing` dispatcher
//! - [`LogCrateProvider`] - delegates to the `log` facade
//!
//! Both adapters are feature-gated (`backend-tracing`, `backend-log`, on by
//! default), so depending on this crate pulls in only the frameworks a host
//! actually wants probed.

mod factory;
#[cfg(feature = "backend-log")]
mod log_adapter;
#[cfg(feature = "backend-tracing")]
mod tracing_adapter;
mod types;

pub use factory::LoggerFactory;
#[cfg(feature = "backend-log")]
pub use log_adapter::{LogCrateLogger, LogCrateProvider};
#[cfg(feature = "backend-tracing")]
pub use tracing_adapter::{TracingLogger, TracingProvider};
pub use types::Provider;

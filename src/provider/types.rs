//! Provider types and traits

use crate::logger::Logger;

/// Trait for logging backend providers.
///
/// A provider represents one logging framework the host process might be
/// using (the `tracing` dispatcher, the `log` facade, ...). Providers are
/// cheap handles: constructing one says nothing about whether its backend
/// is actually present. That question is answered by [`is_available`],
/// which every provider must implement as a passive runtime probe.
///
/// [`is_available`]: Provider::is_available
pub trait Provider: Send + Sync {
    /// Returns the provider's name for logging and identification.
    fn name(&self) -> &str;

    /// Probes whether this provider's backend is usable in the current
    /// process.
    ///
    /// Probes must be side-effect-free: no backend initialization, no
    /// global state changes, no panics. A probe is asked the same question
    /// every time discovery runs, so the answer should only depend on the
    /// host process state.
    fn is_available(&self) -> bool;

    /// Creates a logger bound to `name` on this provider's backend.
    ///
    /// # Arguments
    ///
    /// * `name` - Logical logger name, typically a module path or type name
    fn get_logger(&self, name: &str) -> Box<dyn Logger>;
}

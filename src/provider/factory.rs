//! Logger factory with runtime backend discovery.
//!
//! This module decides, at runtime, which logging backend receives the
//! records written through the facade. Call sites ask a [`LoggerFactory`]
//! for loggers; the factory probes its backend candidates in priority order
//! and binds to the first one that reports itself available.
//!
//! # Discovery
//!
//! - Candidates are probed in priority order; the first available one wins
//! - The winner is cached, so later lookups reuse it without re-probing
//! - A pass with no winner is not cached; a backend installed later in the
//!   process lifetime is still picked up by the next lookup
//! - A panicking probe abandons the whole pass and the factory hands out
//!   no-op loggers instead of unwinding into the caller

#[cfg(feature = "backend-log")]
use super::log_adapter::LogCrateProvider;
#[cfg(feature = "backend-tracing")]
use super::tracing_adapter::TracingProvider;
use super::types::Provider;
use crate::logger::{panic_message, Logger, NoOpLogger, PanicSafeLogger};
use std::any::{self, Any};
use std::fmt;
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, RwLock};

/// Shared handle that binds loggers to one discovered backend.
///
/// A factory starts unresolved. The first logger lookup runs discovery and
/// caches the winning provider; every later lookup reuses it, so all loggers
/// from one factory write to the same backend. When no backend is available
/// the factory stays unresolved and hands out silent no-op loggers, keeping
/// logging failures out of application control flow.
///
/// The factory is `Send + Sync`; share one instance process-wide (or per
/// subsystem) behind an `Arc`.
///
/// # Example
///
/// ```
/// use logport::LoggerFactory;
///
/// let factory = LoggerFactory::new();
/// let logger = factory.get_logger("app::startup");
/// logport::log_info!(logger, "starting up");
/// ```
pub struct LoggerFactory {
    candidates: Vec<Arc<dyn Provider>>,
    resolved: RwLock<Option<Arc<dyn Provider>>>,
}

impl LoggerFactory {
    /// Create a factory over the built-in backend candidates.
    ///
    /// Candidate priority is fixed: `tracing` before `log`. A process that
    /// runs a `tracing` dispatcher usually also carries the `log` bridge,
    /// and native `tracing` output is the richer of the two.
    pub fn new() -> Self {
        Self::with_candidates(default_candidates())
    }

    fn with_candidates(candidates: Vec<Arc<dyn Provider>>) -> Self {
        Self {
            candidates,
            resolved: RwLock::new(None),
        }
    }

    /// Returns a logger bound to `name`.
    ///
    /// Never fails and never panics: with a resolved backend the logger
    /// writes there, otherwise it is a silent no-op. Backend-bound loggers
    /// are wrapped so that a panicking message producer cannot unwind into
    /// the call site.
    pub fn get_logger(&self, name: &str) -> Box<dyn Logger> {
        match self.resolve() {
            Some(provider) => Box::new(PanicSafeLogger::new(provider.get_logger(name))),
            None => Box::new(NoOpLogger),
        }
    }

    /// Returns a logger named after `T`'s fully-qualified type name.
    pub fn get_logger_for<T>(&self) -> Box<dyn Logger> {
        self.get_logger(any::type_name::<T>())
    }

    /// Overrides backend discovery.
    ///
    /// `Some(provider)` pins every later lookup to `provider`, bypassing
    /// probes entirely. `None` clears the binding, so the next lookup runs
    /// discovery again. Loggers handed out earlier keep their old binding.
    pub fn set_provider(&self, provider: Option<Arc<dyn Provider>>) {
        let mut slot = self.resolved.write().unwrap_or_else(|e| e.into_inner());
        *slot = provider;
    }

    /// Returns the currently bound provider, if any.
    ///
    /// Purely observational: an unresolved factory stays unresolved.
    pub fn current_provider(&self) -> Option<Arc<dyn Provider>> {
        self.resolved
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Returns the cached provider, running a discovery pass if none is
    /// bound yet.
    fn resolve(&self) -> Option<Arc<dyn Provider>> {
        {
            let slot = self.resolved.read().unwrap_or_else(|e| e.into_inner());
            if let Some(provider) = slot.as_ref() {
                return Some(Arc::clone(provider));
            }
        }

        let discovered = self.discover()?;

        let mut slot = self.resolved.write().unwrap_or_else(|e| e.into_inner());
        // First write wins when several threads resolved concurrently.
        if slot.is_none() {
            *slot = Some(discovered);
        }
        slot.clone()
    }

    /// Runs one discovery pass over the candidates.
    ///
    /// The pass is panic-guarded as a whole: a misbehaving probe turns the
    /// pass into a no-result, reported on stderr as a side channel.
    fn discover(&self) -> Option<Arc<dyn Provider>> {
        let pass = panic::catch_unwind(AssertUnwindSafe(|| {
            self.candidates
                .iter()
                .find(|candidate| candidate.is_available())
                .map(Arc::clone)
        }));

        match pass {
            Ok(found) => found,
            Err(payload) => {
                report_discovery_failure(payload.as_ref());
                None
            }
        }
    }
}

impl Default for LoggerFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LoggerFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let candidates: Vec<&str> = self.candidates.iter().map(|c| c.name()).collect();
        let resolved = self.current_provider().map(|p| p.name().to_string());
        f.debug_struct("LoggerFactory")
            .field("candidates", &candidates)
            .field("resolved", &resolved)
            .finish()
    }
}

/// Built-in backend candidates, in priority order.
fn default_candidates() -> Vec<Arc<dyn Provider>> {
    #[allow(unused_mut)]
    let mut candidates: Vec<Arc<dyn Provider>> = Vec::new();

    #[cfg(feature = "backend-tracing")]
    candidates.push(Arc::new(TracingProvider::new()));

    #[cfg(feature = "backend-log")]
    candidates.push(Arc::new(LogCrateProvider::new()));

    candidates
}

/// Best-effort report for an abandoned discovery pass.
///
/// Logging itself is unavailable at this point, so stderr is the only
/// channel left. Write failures are ignored.
fn report_discovery_failure(payload: &(dyn Any + Send)) {
    let mut stderr = std::io::stderr().lock();
    let _ = writeln!(
        stderr,
        "logport: backend discovery abandoned: {}",
        panic_message(payload)
    );
}

//! Integration tests for degraded operation without a logging backend.
//!
//! This binary installs neither a `tracing` dispatcher nor a `log` logger,
//! so backend discovery must come up empty and every logger the factory
//! hands out must be a silent no-op. These tests verify:
//! - Discovery resolves to nothing and stays re-probeable
//! - Disabled loggers never invoke message producers
//! - Explicit provider overrides bypass discovery entirely
//! - One factory binding is shared across threads

use logport::{Level, Logger, LoggerExt, LoggerFactory, MessageProducer, Provider};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

// =============================================================================
// Test Helpers
// =============================================================================

type Records = Arc<Mutex<Vec<(String, Level, String)>>>;

/// Provider double that accepts every logger request and records all writes.
struct StaticProvider {
    requests: Mutex<Vec<String>>,
    records: Records,
}

impl StaticProvider {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            records: Arc::new(Mutex::new(Vec::new())),
        })
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn records(&self) -> Vec<(String, Level, String)> {
        self.records.lock().unwrap().clone()
    }
}

impl Provider for StaticProvider {
    fn name(&self) -> &str {
        "static"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn get_logger(&self, name: &str) -> Box<dyn Logger> {
        self.requests.lock().unwrap().push(name.to_string());
        Box::new(CapturingLogger {
            name: name.to_string(),
            records: Arc::clone(&self.records),
        })
    }
}

/// Logger double with every level enabled.
struct CapturingLogger {
    name: String,
    records: Records,
}

impl Logger for CapturingLogger {
    fn write(&self, level: Level, producer: Option<MessageProducer<'_>>) -> bool {
        match producer {
            None => true,
            Some(producer) => {
                self.records
                    .lock()
                    .unwrap()
                    .push((self.name.clone(), level, producer()));
                true
            }
        }
    }

    fn write_with_error(
        &self,
        level: Level,
        producer: Option<MessageProducer<'_>>,
        error: &dyn std::error::Error,
    ) {
        if let Some(producer) = producer {
            let message = format!("{}: {}", producer(), error);
            self.records
                .lock()
                .unwrap()
                .push((self.name.clone(), level, message));
        }
    }
}

// =============================================================================
// Degraded Operation
// =============================================================================

#[test]
fn test_discovery_finds_no_backend() {
    let factory = LoggerFactory::new();
    let logger = factory.get_logger("svc");

    assert!(factory.current_provider().is_none());
    assert!(!logger.write(Level::Error, None));
}

#[test]
fn test_loggers_report_every_level_disabled() {
    let factory = LoggerFactory::new();
    let logger = factory.get_logger("svc");

    assert!(!logger.is_trace_enabled());
    assert!(!logger.is_debug_enabled());
    assert!(!logger.is_info_enabled());
    assert!(!logger.is_warn_enabled());
    assert!(!logger.is_error_enabled());
    assert!(!logger.is_fatal_enabled());
}

#[test]
fn test_disabled_logger_never_invokes_producer() {
    let factory = LoggerFactory::new();
    let logger = factory.get_logger("svc");

    let invocations = AtomicUsize::new(0);
    let producer = || {
        invocations.fetch_add(1, Ordering::SeqCst);
        "never rendered".to_string()
    };

    assert!(!logger.write(Level::Fatal, Some(&producer)));
    logport::log_warn!(logger, "never rendered {}", 1);
    logger.info("also dropped");

    assert_eq!(invocations.load(Ordering::SeqCst), 0);
}

#[test]
fn test_error_writes_are_silently_discarded() {
    let factory = LoggerFactory::new();
    let logger = factory.get_logger("svc");
    let error = std::io::Error::new(std::io::ErrorKind::Other, "disk offline");

    logger.write_with_error(Level::Error, Some(&|| "failed".to_string()), &error);
    logger.error_error("failed twice", &error);
}

// =============================================================================
// Explicit Overrides
// =============================================================================

#[test]
fn test_set_provider_bypasses_discovery() {
    let provider = StaticProvider::new();
    let factory = LoggerFactory::new();
    factory.set_provider(Some(Arc::clone(&provider) as Arc<dyn Provider>));

    let logger = factory.get_logger("svc::worker");
    logport::log_info!(logger, "request {} handled", 12);

    assert_eq!(
        factory.current_provider().expect("pinned provider").name(),
        "static"
    );
    assert_eq!(
        provider.records(),
        vec![(
            "svc::worker".to_string(),
            Level::Info,
            "request 12 handled".to_string()
        )]
    );
}

#[test]
fn test_cleared_override_returns_to_degraded_operation() {
    let provider = StaticProvider::new();
    let factory = LoggerFactory::new();

    factory.set_provider(Some(Arc::clone(&provider) as Arc<dyn Provider>));
    factory.set_provider(None);

    let logger = factory.get_logger("svc");
    assert!(factory.current_provider().is_none());
    assert!(!logger.write(Level::Info, None));
}

#[test]
fn test_get_logger_for_binds_type_name() {
    struct ConfigLoader;

    let provider = StaticProvider::new();
    let factory = LoggerFactory::new();
    factory.set_provider(Some(Arc::clone(&provider) as Arc<dyn Provider>));

    let logger = factory.get_logger_for::<ConfigLoader>();
    logger.debug("loading configuration");

    let requests = provider.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].contains("ConfigLoader"));
}

// =============================================================================
// Shared Binding
// =============================================================================

#[test]
fn test_factory_is_shareable_across_threads() {
    let provider = StaticProvider::new();
    let factory = Arc::new(LoggerFactory::new());
    factory.set_provider(Some(Arc::clone(&provider) as Arc<dyn Provider>));

    let mut handles = Vec::new();
    for worker in 0..4 {
        let factory = Arc::clone(&factory);
        handles.push(thread::spawn(move || {
            let logger = factory.get_logger("svc::pool");
            logport::log_info!(logger, "worker {} ready", worker);
        }));
    }
    for handle in handles {
        handle.join().expect("worker thread completed");
    }

    let records = provider.records();
    assert_eq!(records.len(), 4);
    assert!(records
        .iter()
        .all(|(name, level, _)| name == "svc::pool" && *level == Level::Info));
    assert_eq!(
        factory.current_provider().expect("bound provider").name(),
        "static"
    );
}

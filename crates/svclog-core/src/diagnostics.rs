//! Side channel for delivery failures
//!
//! Emission never reports errors to the caller. Failed deliveries are
//! counted here instead, and the first one prints a single notice to stderr.

use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

/// Counters for records a sink failed to deliver
#[derive(Debug, Default)]
pub struct DeliveryDiagnostics {
    failures: AtomicU64,
    last_error: Mutex<Option<String>>,
    quiet: bool,
}

impl DeliveryDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diagnostics that never print to stderr
    pub fn quiet() -> Self {
        Self {
            quiet: true,
            ..Self::default()
        }
    }

    /// Record a failed delivery
    pub fn record_failure(&self, sink: &str, error: impl std::fmt::Display) {
        let message = format!("{}: {}", sink, error);
        let previous = self.failures.fetch_add(1, Ordering::Relaxed);
        if previous == 0 && !self.quiet {
            // Best effort: stderr may itself be the broken sink.
            let _ = writeln!(
                std::io::stderr().lock(),
                "svclog: log delivery failed ({}); further failures are counted silently",
                message
            );
        }
        *self.last_error.lock() = Some(message);
    }

    /// Number of records that could not be delivered
    pub fn failure_count(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }

    /// Most recent failure, formatted as `<sink>: <error>`
    pub fn last_error(&self) -> Option<String> {
        self.last_error.lock().clone()
    }

    pub fn reset(&self) {
        self.failures.store(0, Ordering::Relaxed);
        *self.last_error.lock() = None;
    }
}

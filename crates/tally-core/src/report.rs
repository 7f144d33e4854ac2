//! Error reporting collaborator.
//!
//! Every failure path in the score store hands its error to an
//! [`ErrorReporter`] before returning it. Fatal reports mean the caller must
//! not continue into gameplay that depends on persistence; non-fatal reports
//! allow the session to go on with degraded data.

use std::sync::Mutex;

use tracing::{error, warn};

use crate::error::Error;

/// Sink for store failures
pub trait ErrorReporter: Send + Sync {
    fn report(&self, message: &str, cause: &Error, fatal: bool);
}

/// Reporter that logs through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, message: &str, cause: &Error, fatal: bool) {
        if fatal {
            error!(fatal = true, "{}: {}", message, cause);
        } else {
            warn!("{}: {}", message, cause);
        }
    }
}

/// A single captured report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub message: String,
    pub cause: String,
    pub fatal: bool,
}

/// Reporter that keeps every report in memory
#[derive(Debug, Default)]
pub struct RecordingReporter {
    reports: Mutex<Vec<Report>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the reports received so far
    pub fn reports(&self) -> Vec<Report> {
        match self.reports.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.reports().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_fatal(&self) -> bool {
        self.reports().iter().any(|r| r.fatal)
    }
}

impl ErrorReporter for RecordingReporter {
    fn report(&self, message: &str, cause: &Error, fatal: bool) {
        let report = Report {
            message: message.to_string(),
            cause: cause.to_string(),
            fatal,
        };
        match self.reports.lock() {
            Ok(mut guard) => guard.push(report),
            Err(poisoned) => poisoned.into_inner().push(report),
        }
    }
}

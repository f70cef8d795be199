//! Reporting channel for problems found while building a command
//!
//! The linter never logs through a process-wide handle directly; it is handed
//! a [`Reporter`] at construction. The binary uses [`TracingReporter`], tests
//! use [`RecordingReporter`] and assert on what was emitted.

use std::cell::RefCell;

use tracing::{error, warn};

pub trait Reporter {
    /// Detailed error-level log entry
    fn error(&self, message: &str);

    fn warn(&self, message: &str);

    /// Short user-facing notice that this lint run was abandoned
    fn notify_failure(&self, summary: &str);
}

/// Forwards everything to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn error(&self, message: &str) {
        error!(target: "phpstan_lint", "{}", message);
    }

    fn warn(&self, message: &str) {
        warn!(target: "phpstan_lint", "{}", message);
    }

    fn notify_failure(&self, summary: &str) {
        error!(target: "phpstan_lint::notify", "{}", summary);
    }
}

/// A single reported entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Error(String),
    Warn(String),
    Failure(String),
}

/// Keeps reports in memory
#[derive(Debug, Default)]
pub struct RecordingReporter {
    reports: RefCell<Vec<Report>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<Report> {
        self.reports.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.reports
            .borrow()
            .iter()
            .filter_map(|r| match r {
                Report::Error(msg) => Some(msg.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.reports
            .borrow()
            .iter()
            .filter_map(|r| match r {
                Report::Warn(msg) => Some(msg.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn failures(&self) -> usize {
        self.reports
            .borrow()
            .iter()
            .filter(|r| matches!(r, Report::Failure(_)))
            .count()
    }
}

impl Reporter for RecordingReporter {
    fn error(&self, message: &str) {
        self.reports.borrow_mut().push(Report::Error(message.to_string()));
    }

    fn warn(&self, message: &str) {
        self.reports.borrow_mut().push(Report::Warn(message.to_string()));
    }

    fn notify_failure(&self, summary: &str) {
        self.reports
            .borrow_mut()
            .push(Report::Failure(summary.to_string()));
    }
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn error(&self, message: &str) {
        (**self).error(message)
    }

    fn warn(&self, message: &str) {
        (**self).warn(message)
    }

    fn notify_failure(&self, summary: &str) {
        (**self).notify_failure(summary)
    }
}

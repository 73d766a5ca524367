//! Human-facing reporting contract
//!
//! Validation and setup code describe rejected input through a [`Reporter`].
//! Reporting is fire-and-forget: nothing a reporter does may change the
//! outcome of the code that calls it.

use std::cell::{Cell, RefCell};

/// How a reported message should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Plain output
    #[default]
    Default,
    /// Informational banner text
    Message,
    /// Confirmation of an accepted value
    Success,
    /// Explanation of a rejected value or a fatal error
    Error,
}

/// Sink for human-facing diagnostics
pub trait Reporter {
    /// Report a block of lines with one severity
    fn report(&self, messages: &[String], severity: Severity);

    /// Report a single line
    fn report_one(&self, message: &str, severity: Severity) {
        self.report(&[message.to_string()], severity);
    }

    /// Start a fresh screen before a block of output, where supported
    fn clear_screen(&self) {}
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn report(&self, messages: &[String], severity: Severity) {
        (**self).report(messages, severity)
    }

    fn clear_screen(&self) {
        (**self).clear_screen()
    }
}

/// Reporter that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn report(&self, _messages: &[String], _severity: Severity) {}
}

/// Reporter that keeps every message, for tests and transcripts
#[derive(Debug, Default)]
pub struct RecordingReporter {
    entries: RefCell<Vec<(Severity, String)>>,
    clears: Cell<usize>,
}

impl RecordingReporter {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded lines with their severity, oldest first
    pub fn entries(&self) -> Vec<(Severity, String)> {
        self.entries.borrow().clone()
    }

    /// Recorded lines of one severity
    pub fn messages(&self, severity: Severity) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// How many times the screen was cleared
    pub fn clears(&self) -> usize {
        self.clears.get()
    }

    /// Whether any recorded line of `severity` contains `needle`
    pub fn contains(&self, severity: Severity, needle: &str) -> bool {
        self.entries
            .borrow()
            .iter()
            .any(|(s, m)| *s == severity && m.contains(needle))
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, messages: &[String], severity: Severity) {
        self.entries
            .borrow_mut()
            .extend(messages.iter().map(|m| (severity, m.clone())));
    }

    fn clear_screen(&self) {
        self.clears.set(self.clears.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_reporter_keeps_order_and_severity() {
        let reporter = RecordingReporter::new();
        reporter.report(&["one".to_string(), "two".to_string()], Severity::Message);
        reporter.report_one("bad", Severity::Error);

        assert_eq!(reporter.entries().len(), 3);
        assert_eq!(reporter.messages(Severity::Message), vec!["one", "two"]);
        assert!(reporter.contains(Severity::Error, "bad"));
        assert!(!reporter.contains(Severity::Success, "bad"));
    }

    #[test]
    fn test_reporter_through_reference() {
        let reporter = RecordingReporter::new();
        let by_ref = &reporter;
        by_ref.report_one("hello", Severity::Default);
        by_ref.clear_screen();
        assert_eq!(reporter.messages(Severity::Default), vec!["hello"]);
        assert_eq!(reporter.clears(), 1);
    }
}

//! Side-channel record of the candidates that did not make it into the output.

use std::collections::BTreeMap;

/// A skipped candidate together with the reason it was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipReason {
    pub path: String,
    pub reason: String,
}

/// Receives skip notifications from the selection engine.
pub trait DiagnosticSink {
    fn skipped(&mut self, path: &str, reason: &str);
}

/// Discards every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDiagnostics;

impl DiagnosticSink for NoDiagnostics {
    fn skipped(&mut self, _path: &str, _reason: &str) {}
}

/// Collects skip reasons, keyed by path.
#[derive(Debug, Default, Clone)]
pub struct SkipLog {
    // A path found by several include patterns is recorded once.
    skipped: BTreeMap<String, String>,
}

impl SkipLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Skip reasons sorted by path.
    pub fn reasons(&self) -> Vec<SkipReason> {
        self.skipped
            .iter()
            .map(|(path, reason)| SkipReason { path: path.clone(), reason: reason.clone() })
            .collect()
    }

    /// Renders the log as a two column table sorted by path.
    pub fn table(&self) -> String {
        let width = self.skipped.keys().map(|p| p.chars().count()).max().unwrap_or(0);
        self.skipped
            .iter()
            .map(|(path, reason)| format!("{path:<width$}  {reason}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl DiagnosticSink for SkipLog {
    fn skipped(&mut self, path: &str, reason: &str) {
        self.skipped.entry(path.to_string()).or_insert_with(|| reason.to_string());
    }
}

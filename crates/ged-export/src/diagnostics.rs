//! Structured diagnostics for locally-recovered conditions.
//!
//! The export deliberately tolerates a loosely-consistent database:
//! dangling handles and missing media files are skipped, not fatal.
//! Each such skip is recorded here (and logged through `tracing`) so
//! the behavior stays observable and testable.

use std::fmt;

use serde::Serialize;
use tracing::warn;

/// What kind of condition was recovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A referenced entity was not found in the database.
    DanglingHandle,
    /// A back-reference pointed at a person with no matching event
    /// reference (stale index).
    StaleBacklink,
    /// A referenced media file does not exist on disk.
    MissingMediaFile,
    /// A person carries more than one nickname attribute; only the
    /// first is used.
    AmbiguousNickname,
}

impl DiagnosticKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticKind::DanglingHandle => "dangling handle",
            DiagnosticKind::StaleBacklink => "stale backlink",
            DiagnosticKind::MissingMediaFile => "missing media file",
            DiagnosticKind::AmbiguousNickname => "ambiguous nickname",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recovered condition.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
}

/// Collector for recovered conditions during one export run.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let message = message.into();
        warn!(kind = kind.as_str(), "{message}");
        self.entries.push(Diagnostic { kind, message });
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count_of(&self, kind: DiagnosticKind) -> usize {
        self.entries.iter().filter(|d| d.kind == kind).count()
    }

    pub fn into_entries(self) -> Vec<Diagnostic> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_and_counts_by_kind() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.record(DiagnosticKind::DanglingHandle, "citation c9 not found");
        diagnostics.record(DiagnosticKind::MissingMediaFile, "/img/a.jpg");
        diagnostics.record(DiagnosticKind::DanglingHandle, "note n3 not found");
        assert_eq!(diagnostics.len(), 3);
        assert_eq!(diagnostics.count_of(DiagnosticKind::DanglingHandle), 2);
        assert_eq!(diagnostics.count_of(DiagnosticKind::StaleBacklink), 0);
    }
}

//! Core types for matcher findings and results.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level for findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, never fails a check.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl Severity {
    /// Parses the lowercase form used in TOML and on the command line.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "info" => Some(Self::Info),
            "warning" => Some(Self::Warning),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Where a finding points: a snapshot file and a site line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Snapshot file the site came from.
    pub file: PathBuf,
    /// Source line of the site.
    pub line: u32,
}

impl Location {
    /// Creates a new location.
    #[must_use]
    pub fn new(file: PathBuf, line: u32) -> Self {
        Self { file, line }
    }
}

/// A site accepted by a matcher group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// Matcher group id (e.g. "S2077" or "no-peek").
    pub id: String,
    /// Severity of the group.
    pub severity: Severity,
    /// Matched site.
    pub location: Location,
    /// Message of the group.
    pub message: String,
}

impl Finding {
    /// Creates a new finding.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        severity: Severity,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            severity,
            location,
            message: message.into(),
        }
    }

    /// Formats the finding for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        self.format_with(&self.severity.to_string())
    }

    /// Like [`format`](Self::format), with `severity` in place of the
    /// severity name (e.g. a coloured label).
    #[must_use]
    pub fn format_with(&self, severity: &str) -> String {
        use std::fmt::Write;
        let mut output = format!(
            "{} at {}:{}\n",
            self.id,
            self.location.file.display(),
            self.location.line,
        );
        let _ = writeln!(output, "  {severity}: {}", self.message);
        output
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {} [{}] {}",
            self.location.file.display(),
            self.location.line,
            self.severity,
            self.id,
            self.message
        )
    }
}

/// Result of running matcher groups over a snapshot.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MatchReport {
    /// All findings, ordered by line.
    pub findings: Vec<Finding>,
    /// Number of sites checked.
    pub sites_checked: usize,
}

impl MatchReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(|f| f.severity == Severity::Error)
    }

    /// Counts findings as `(errors, warnings, infos)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let count = |severity| {
            self.findings
                .iter()
                .filter(|f| f.severity == severity)
                .count()
        };
        (
            count(Severity::Error),
            count(Severity::Warning),
            count(Severity::Info),
        )
    }

    /// Checks if any finding meets or exceeds the given severity threshold.
    #[must_use]
    pub fn has_findings_at(&self, severity: Severity) -> bool {
        self.findings.iter().any(|f| f.severity >= severity)
    }

    /// One-line summary of the counts.
    #[must_use]
    pub fn summary(&self) -> String {
        let (errors, warnings, infos) = self.count_by_severity();
        format!(
            "Found {errors} error(s), {warnings} warning(s), {infos} info(s) in {} site(s)",
            self.sites_checked
        )
    }

    /// Adds findings from another report.
    pub fn extend(&mut self, other: Self) {
        self.findings.extend(other.findings);
        self.sites_checked += other.sites_checked;
    }
}

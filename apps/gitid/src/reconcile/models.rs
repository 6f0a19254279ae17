//! Reconciliation models and types.
//!
//! Severity levels, per-field outcomes and report lines shared by the engine,
//! the aggregator and the run summary.

use serde::Serialize;

use crate::models::{GitIdentityEntry, GitRemote, GpgKeyEntry, SshHostEntry};

/// Severity of a report line, ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational line echoing a raw value
    Neutral,
    /// Present and matching
    Good,
    /// Absent, unset or unresolved
    Warning,
    /// Present and mismatching
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Neutral => "neutral",
            Severity::Good => "good",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Status symbol shown before a line
    pub fn symbol(&self) -> &'static str {
        match self {
            Severity::Neutral => "",
            Severity::Good => "✅ ",
            Severity::Warning => "❔ ",
            Severity::Error => "❌ ",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a plain identity field is set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Set,
    Missing,
}

impl Presence {
    pub fn of(value: &str) -> Self {
        if value.is_empty() {
            Presence::Missing
        } else {
            Presence::Set
        }
    }
}

/// Outcome of comparing a resolved value against the git identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldMatch {
    Match,
    Mismatch,
}

impl FieldMatch {
    pub fn compare(actual: &str, expected: &str) -> Self {
        if actual == expected {
            FieldMatch::Match
        } else {
            FieldMatch::Mismatch
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            FieldMatch::Match => Severity::Good,
            FieldMatch::Mismatch => Severity::Error,
        }
    }
}

/// Signing key classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum SigningCheck<'a> {
    /// `user.signingkey` is empty
    Unset,
    /// Set, but no keyring entry carries it
    NoMatchingKey,
    Resolved {
        key: &'a GpgKeyEntry,
        name: FieldMatch,
        email: FieldMatch,
    },
}

/// SSH classification of one remote
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum SshCheck<'a> {
    Unmatched,
    Resolved { host: &'a SshHostEntry, email: FieldMatch },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteCheck<'a> {
    pub remote: &'a GitRemote,
    pub ssh: SshCheck<'a>,
}

/// Field-level comparison of one git identity entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult<'a> {
    #[serde(skip)]
    pub entry: &'a GitIdentityEntry,
    pub name: Presence,
    pub email: Presence,
    pub signing: SigningCheck<'a>,
    /// In remote declaration order
    pub remotes: Vec<RemoteCheck<'a>>,
    /// No remotes on a non-global entry
    pub remotes_missing: bool,
}

/// One rendered report line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportLine {
    pub text: String,
    pub indent: usize,
    pub severity: Severity,
    pub heading: bool,
}

impl ReportLine {
    pub fn new(text: impl Into<String>, indent: usize, severity: Severity) -> Self {
        Self {
            text: text.into(),
            indent,
            severity,
            heading: false,
        }
    }

    pub fn heading(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            text: text.into(),
            indent: 0,
            severity,
            heading: true,
        }
    }
}

/// Report lines for one entry, heading first, plus the rolled-up severity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryReport {
    pub severity: Severity,
    pub lines: Vec<ReportLine>,
}

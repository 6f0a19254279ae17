//! Identity reconciliation.
//!
//! Correlates git identity entries with the GPG keyring and SSH host entries,
//! then rolls every field up into one severity per entry.

pub mod engine;
pub mod matcher;
pub mod models;
pub mod report;
pub mod summary;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::models::{GitIdentityEntry, GpgKeyEntry, SshHostEntry};

pub use engine::compare;
pub use matcher::{match_gpg, match_ssh};
pub use models::{ComparisonResult, EntryReport, ReportLine, Severity};
pub use report::aggregate;
pub use summary::RunSummary;

/// Everything computed for one entry
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryOutcome<'a> {
    pub entry: &'a GitIdentityEntry,
    pub comparison: ComparisonResult<'a>,
    pub report: EntryReport,
}

impl EntryOutcome<'_> {
    pub fn severity(&self) -> Severity {
        self.report.severity
    }
}

/// Result of a complete run, in entry discovery order
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reconciliation<'a> {
    pub entries: Vec<EntryOutcome<'a>>,
    pub summary: RunSummary,
}

impl Reconciliation<'_> {
    /// Worst entry severity; good for an empty run
    pub fn severity(&self) -> Severity {
        self.entries
            .iter()
            .map(EntryOutcome::severity)
            .max()
            .unwrap_or(Severity::Good)
    }
}

/// Reconcile every entry against the keyring and SSH hosts
///
/// Any fatal error aborts before a single report is produced.
pub fn reconcile<'a>(
    git_entries: &'a [GitIdentityEntry],
    gpg_entries: &'a [GpgKeyEntry],
    ssh_entries: &'a [SshHostEntry],
) -> Result<Reconciliation<'a>> {
    let comparisons = git_entries
        .iter()
        .map(|entry| compare(entry, gpg_entries, ssh_entries))
        .collect::<Result<Vec<_>>>()?;

    let summary = RunSummary::collect(&comparisons);

    let entries = comparisons
        .into_iter()
        .map(|comparison| {
            let report = aggregate(&comparison);
            debug!(entry = %comparison.entry.path.display(), severity = %report.severity, "Reconciled entry");
            EntryOutcome {
                entry: comparison.entry,
                comparison,
                report,
            }
        })
        .collect();

    Ok(Reconciliation { entries, summary })
}

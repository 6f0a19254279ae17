//! Collection-level summary across every entry of a run.

use std::collections::BTreeSet;

use serde::Serialize;

use super::models::{ComparisonResult, ReportLine, Severity, SshCheck};

/// Distinct identity values and unconfigured hostnames seen in one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub entry_count: usize,
    pub names: BTreeSet<String>,
    pub emails: BTreeSet<String>,
    pub signing_keys: BTreeSet<String>,
    /// Remote hostnames with no SSH host entry anywhere in the run
    pub unconfigured_hostnames: BTreeSet<String>,
    pub cross_repository_mismatch: bool,
}

impl RunSummary {
    pub fn collect<'r, 'a: 'r>(results: impl IntoIterator<Item = &'r ComparisonResult<'a>>) -> Self {
        let mut summary = RunSummary::default();

        for result in results {
            let entry = result.entry;
            summary.entry_count += 1;
            summary.names.insert(entry.name.clone());
            summary.emails.insert(entry.email.clone());
            summary.signing_keys.insert(entry.signing_key.clone());

            for check in &result.remotes {
                if check.ssh == SshCheck::Unmatched {
                    summary
                        .unconfigured_hostnames
                        .insert(check.remote.hostname().to_string());
                }
            }
        }

        summary.cross_repository_mismatch = summary.entry_count > 1
            && (summary.names.len() > 1 || summary.emails.len() > 1 || summary.signing_keys.len() > 1);
        summary
    }

    /// Supplementary report block; empty when there is nothing to flag
    pub fn lines(&self) -> Vec<ReportLine> {
        let mut lines = Vec::new();

        if self.cross_repository_mismatch {
            lines.push(ReportLine::heading("Identity values differ across repositories", Severity::Warning));
            push_values(&mut lines, "user.name", &self.names);
            push_values(&mut lines, "user.email", &self.emails);
            push_values(&mut lines, "user.signingkey", &self.signing_keys);
        }

        if !self.unconfigured_hostnames.is_empty() {
            lines.push(ReportLine::heading("Hostnames without a matching ssh host", Severity::Warning));
            for hostname in &self.unconfigured_hostnames {
                lines.push(ReportLine::new(format!("\"{}\"", hostname), 1, Severity::Neutral));
            }
        }

        lines
    }
}

fn push_values(lines: &mut Vec<ReportLine>, label: &str, values: &BTreeSet<String>) {
    let severity = if values.len() > 1 { Severity::Warning } else { Severity::Good };
    lines.push(ReportLine::new(format!("{} ({} distinct)", label, values.len()), 1, severity));
    for value in values {
        lines.push(ReportLine::new(format!("\"{}\"", value), 2, Severity::Neutral));
    }
}

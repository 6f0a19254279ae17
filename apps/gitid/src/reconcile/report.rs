//! Severity aggregation.
//!
//! Folds a comparison result into ordered report lines. The heading line
//! carries the entry's worst severity and is placed first once every other
//! line is known.

use super::models::{ComparisonResult, EntryReport, FieldMatch, Presence, ReportLine, Severity, SigningCheck, SshCheck};

/// Render the report lines and overall severity for one entry
pub fn aggregate(result: &ComparisonResult<'_>) -> EntryReport {
    let entry = result.entry;
    let mut lines = Vec::new();

    lines.push(ReportLine::new(format!("git: user.name = \"{}\"", entry.name), 1, Severity::Neutral));
    if result.name == Presence::Missing {
        lines.push(ReportLine::new("Missing git user name", 2, Severity::Warning));
    }

    lines.push(ReportLine::new(format!("git: user.email = \"{}\"", entry.email), 1, Severity::Neutral));
    if result.email == Presence::Missing {
        lines.push(ReportLine::new("Missing git user email", 2, Severity::Warning));
    }

    lines.push(ReportLine::new(
        format!("git: user.signingkey = \"{}\"", entry.signing_key),
        1,
        Severity::Neutral,
    ));
    match &result.signing {
        SigningCheck::Unset => {
            lines.push(ReportLine::new("No signing key set for this repo", 2, Severity::Warning));
        }
        SigningCheck::NoMatchingKey => {
            lines.push(ReportLine::new("No matching key in the gpg keyring", 2, Severity::Warning));
        }
        SigningCheck::Resolved { key, name, email } => {
            push_comparison(
                &mut lines,
                2,
                format!("gpg ({}): uid.name", entry.signing_key),
                &key.name,
                "git user.name",
                *name,
            );
            push_comparison(
                &mut lines,
                2,
                format!("gpg ({}): uid.email", entry.signing_key),
                &key.email,
                "git user.email",
                *email,
            );
        }
    }

    if result.remotes_missing {
        lines.push(ReportLine::new("No remotes configured for this repo", 1, Severity::Warning));
    }

    for check in &result.remotes {
        lines.push(ReportLine::new(
            format!("git: [remote \"{}\"].url = \"{}\"", check.remote.remote_name(), check.remote.url()),
            1,
            Severity::Neutral,
        ));
        match &check.ssh {
            SshCheck::Unmatched => {
                lines.push(ReportLine::new(
                    format!("No known ssh host with the hostname \"{}\"", check.remote.hostname()),
                    2,
                    Severity::Warning,
                ));
            }
            SshCheck::Resolved { host, email } => {
                lines.push(ReportLine::new(
                    format!(
                        "ssh (Host: \"{}\" => IdentityFile: \"{}\")",
                        host.hostname, host.identity_file_path
                    ),
                    2,
                    Severity::Neutral,
                ));
                push_comparison(&mut lines, 2, "=> email".to_string(), &host.email, "git user.email", *email);
            }
        }
    }

    let severity = overall_severity(&lines);
    lines.insert(
        0,
        ReportLine::heading(format!("{} ({})", entry.display_name(), entry.path.display()), severity),
    );

    EntryReport { severity, lines }
}

/// Worst severity among the lines; neutral-only reports count as good
pub fn overall_severity(lines: &[ReportLine]) -> Severity {
    lines
        .iter()
        .map(|line| line.severity)
        .max()
        .unwrap_or(Severity::Good)
        .max(Severity::Good)
}

fn push_comparison(
    lines: &mut Vec<ReportLine>,
    indent: usize,
    description: String,
    value: &str,
    against: &str,
    outcome: FieldMatch,
) {
    lines.push(ReportLine::new(format!("{} = \"{}\"", description, value), indent, Severity::Neutral));
    let text = match outcome {
        FieldMatch::Match => format!("Matches {}", against),
        FieldMatch::Mismatch => format!("Does not match {}", against),
    };
    lines.push(ReportLine::new(text, indent + 1, outcome.severity()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ConfigScope, GitIdentityEntry, GitRemote, GpgKeyEntry, SshHostEntry};
    use crate::reconcile::engine::compare;

    fn alice() -> GitIdentityEntry {
        GitIdentityEntry::builder("/home/alice/b/.git/config", ConfigScope::Repository)
            .name("Alice")
            .email("a@x.com")
            .signing_key("KEY1")
            .remote(GitRemote::new("origin", "git@github.com:a/b.git").unwrap())
            .build()
    }

    fn texts(report: &EntryReport) -> Vec<&str> {
        report.lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_all_matching_is_good() {
        let entry = alice();
        let gpg = vec![GpgKeyEntry::new("KEY1", "Alice", "a@x.com")];
        let ssh = vec![SshHostEntry::new("github.com", "~/.ssh/id1", "a@x.com")];
        let report = aggregate(&compare(&entry, &gpg, &ssh).unwrap());

        assert_eq!(report.severity, Severity::Good);
        assert!(report.lines.iter().all(|l| l.severity != Severity::Error));
        assert!(report.lines.iter().all(|l| !l.text.starts_with("Does not match")));
        assert_eq!(
            texts(&report),
            vec![
                "b (/home/alice/b/.git/config)",
                "git: user.name = \"Alice\"",
                "git: user.email = \"a@x.com\"",
                "git: user.signingkey = \"KEY1\"",
                "gpg (KEY1): uid.name = \"Alice\"",
                "Matches git user.name",
                "gpg (KEY1): uid.email = \"a@x.com\"",
                "Matches git user.email",
                "git: [remote \"origin\"].url = \"git@github.com:a/b.git\"",
                "ssh (Host: \"github.com\" => IdentityFile: \"~/.ssh/id1\")",
                "=> email = \"a@x.com\"",
                "Matches git user.email",
            ]
        );
    }

    #[test]
    fn test_gpg_email_mismatch_is_error() {
        let entry = alice();
        let gpg = vec![GpgKeyEntry::new("KEY1", "Alice", "other@x.com")];
        let ssh = vec![SshHostEntry::new("github.com", "~/.ssh/id1", "a@x.com")];
        let report = aggregate(&compare(&entry, &gpg, &ssh).unwrap());

        assert_eq!(report.severity, Severity::Error);
        let mismatch = report
            .lines
            .iter()
            .find(|l| l.text == "Does not match git user.email")
            .unwrap();
        assert_eq!(mismatch.severity, Severity::Error);
        assert_eq!(mismatch.indent, 3);
    }

    #[test]
    fn test_heading_is_first_and_carries_severity() {
        let entry = alice();
        let report = aggregate(&compare(&entry, &[], &[]).unwrap());

        let heading = &report.lines[0];
        assert!(heading.heading);
        assert_eq!(heading.indent, 0);
        assert_eq!(heading.severity, Severity::Warning);
        assert_eq!(report.severity, Severity::Warning);
        assert_eq!(report.lines.iter().filter(|l| l.heading).count(), 1);
    }

    #[test]
    fn test_no_remotes_warning_except_global() {
        let repo = GitIdentityEntry::builder("/r/repo/.git/config", ConfigScope::Repository)
            .name("Alice")
            .email("a@x.com")
            .build();
        let report = aggregate(&compare(&repo, &[], &[]).unwrap());
        let line = report
            .lines
            .iter()
            .find(|l| l.text == "No remotes configured for this repo")
            .unwrap();
        assert_eq!(line.severity, Severity::Warning);

        let global = GitIdentityEntry {
            path: "/home/a/.gitconfig".into(),
            scope: ConfigScope::Global,
            ..repo.clone()
        };
        let report = aggregate(&compare(&global, &[], &[]).unwrap());
        assert!(!texts(&report).contains(&"No remotes configured for this repo"));
        assert!(report.lines[0].text.starts_with("GLOBAL ("));
    }

    #[test]
    fn test_missing_values_warn() {
        let entry = GitIdentityEntry::builder("/r/repo/.git/config", ConfigScope::Global).build();
        let report = aggregate(&compare(&entry, &[], &[]).unwrap());
        let warnings: Vec<&str> = report
            .lines
            .iter()
            .filter(|l| !l.heading && l.severity == Severity::Warning)
            .map(|l| l.text.as_str())
            .collect();
        assert_eq!(
            warnings,
            vec!["Missing git user name", "Missing git user email", "No signing key set for this repo"]
        );
    }

    #[test]
    fn test_unmatched_host_warns_and_error_dominates() {
        let entry = alice();
        let gpg = vec![GpgKeyEntry::new("KEY1", "Bob", "a@x.com")];
        let report = aggregate(&compare(&entry, &gpg, &[]).unwrap());
        assert!(texts(&report).contains(&"No known ssh host with the hostname \"github.com\""));
        assert_eq!(report.severity, Severity::Error);
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let entry = alice();
        let gpg = vec![GpgKeyEntry::new("KEY1", "Alice", "other@x.com")];
        let result = compare(&entry, &gpg, &[]).unwrap();
        assert_eq!(aggregate(&result), aggregate(&result));
    }

    #[test]
    fn test_overall_severity_floor_is_good() {
        assert_eq!(overall_severity(&[]), Severity::Good);
        assert_eq!(
            overall_severity(&[ReportLine::new("x", 1, Severity::Neutral)]),
            Severity::Good
        );
    }
}

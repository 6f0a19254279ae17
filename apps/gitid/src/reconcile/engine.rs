//! Reconciliation engine.
//!
//! Runs the matcher for one git identity entry and classifies every field
//! independently.

use crate::error::Result;
use crate::models::{GitIdentityEntry, GpgKeyEntry, SshHostEntry};

use super::matcher::{match_gpg, match_ssh};
use super::models::{ComparisonResult, FieldMatch, Presence, RemoteCheck, SigningCheck, SshCheck};

/// Build the comparison result for one entry
///
/// An ambiguous signing key propagates as an error and aborts the run.
pub fn compare<'a>(
    entry: &'a GitIdentityEntry,
    gpg_entries: &'a [GpgKeyEntry],
    ssh_entries: &'a [SshHostEntry],
) -> Result<ComparisonResult<'a>> {
    let signing = if entry.signing_key.is_empty() {
        SigningCheck::Unset
    } else {
        match match_gpg(entry, gpg_entries)? {
            Some(key) => SigningCheck::Resolved {
                key,
                name: FieldMatch::compare(&key.name, &entry.name),
                email: FieldMatch::compare(&key.email, &entry.email),
            },
            None => SigningCheck::NoMatchingKey,
        }
    };

    let remotes = entry
        .remotes
        .iter()
        .map(|remote| RemoteCheck {
            remote,
            ssh: match match_ssh(remote, ssh_entries) {
                Some(host) => SshCheck::Resolved {
                    host,
                    email: FieldMatch::compare(&host.email, &entry.email),
                },
                None => SshCheck::Unmatched,
            },
        })
        .collect();

    Ok(ComparisonResult {
        entry,
        name: Presence::of(&entry.name),
        email: Presence::of(&entry.email),
        signing,
        remotes,
        remotes_missing: entry.remotes.is_empty() && !entry.is_global(),
    })
}

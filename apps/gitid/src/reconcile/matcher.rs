//! Cross-reference resolution between a git identity and the keyring / SSH hosts.
//!
//! Pure functions over explicit inputs; no I/O and no hidden state.

use crate::error::{GitIdError, Result};
use crate::models::{GitIdentityEntry, GitRemote, GpgKeyEntry, SshHostEntry};

/// Resolve the keyring entry whose key id equals the entry's signing key
///
/// An unset signing key or an unknown key resolves to None. Two keyring
/// entries sharing the key id is an invalid keyring and fails the run.
pub fn match_gpg<'a>(entry: &GitIdentityEntry, gpg_entries: &'a [GpgKeyEntry]) -> Result<Option<&'a GpgKeyEntry>> {
    if entry.signing_key.is_empty() {
        return Ok(None);
    }

    let mut matching = gpg_entries
        .iter()
        .filter(|gpg| gpg.public_key == entry.signing_key);

    let first = matching.next();
    if first.is_some() && matching.next().is_some() {
        return Err(GitIdError::ambiguous_key(&entry.signing_key));
    }

    Ok(first)
}

/// Resolve the SSH host entry whose alias equals the remote's hostname
///
/// When the alias is repeated, the earliest entry wins, mirroring how the SSH
/// client applies the first matching `Host` block.
pub fn match_ssh<'a>(remote: &GitRemote, ssh_entries: &'a [SshHostEntry]) -> Option<&'a SshHostEntry> {
    first_in_order(ssh_entries, |ssh| ssh.hostname == remote.hostname())
}

/// First element satisfying `predicate`, in the slice's original order
fn first_in_order<T>(items: &[T], predicate: impl Fn(&T) -> bool) -> Option<&T> {
    items.iter().find(|&item| predicate(item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ConfigScope;

    fn entry_with_key(signing_key: &str) -> GitIdentityEntry {
        GitIdentityEntry::builder("/r/.git/config", ConfigScope::Repository)
            .name("Alice")
            .email("a@x.com")
            .signing_key(signing_key)
            .build()
    }

    fn remote(host: &str) -> GitRemote {
        GitRemote::new("origin", format!("git@{}:a/b.git", host)).unwrap()
    }

    #[test]
    fn test_unset_signing_key_is_absent() {
        let gpg = vec![GpgKeyEntry::new("", "Nobody", "n@x.com"), GpgKeyEntry::new("", "Nobody", "n@x.com")];
        assert_eq!(match_gpg(&entry_with_key(""), &gpg).unwrap(), None);
    }

    #[test]
    fn test_single_match() {
        let gpg = vec![
            GpgKeyEntry::new("KEY0", "Other", "o@x.com"),
            GpgKeyEntry::new("KEY1", "Alice", "a@x.com"),
        ];
        assert_eq!(match_gpg(&entry_with_key("KEY1"), &gpg).unwrap(), Some(&gpg[1]));
    }

    #[test]
    fn test_no_matching_key() {
        let gpg = vec![GpgKeyEntry::new("KEY0", "Other", "o@x.com")];
        assert_eq!(match_gpg(&entry_with_key("KEY1"), &gpg).unwrap(), None);
    }

    #[test]
    fn test_duplicate_key_is_ambiguous() {
        let gpg = vec![
            GpgKeyEntry::new("KEY1", "Alice", "a@x.com"),
            GpgKeyEntry::new("KEY2", "Bob", "b@x.com"),
            GpgKeyEntry::new("KEY1", "Alice Again", "a2@x.com"),
        ];
        let err = match_gpg(&entry_with_key("KEY1"), &gpg).unwrap_err();
        match err {
            GitIdError::AmbiguousKey { signing_key } => assert_eq!(signing_key, "KEY1"),
            other => panic!("unexpected error: {other}"),
        }

        // Unrelated keys still resolve
        assert_eq!(match_gpg(&entry_with_key("KEY2"), &gpg).unwrap(), Some(&gpg[1]));
        assert_eq!(match_gpg(&entry_with_key("KEY3"), &gpg).unwrap(), None);
    }

    #[test]
    fn test_match_gpg_is_deterministic() {
        let gpg = vec![GpgKeyEntry::new("KEY1", "Alice", "a@x.com")];
        let entry = entry_with_key("KEY1");
        let first = match_gpg(&entry, &gpg).unwrap();
        for _ in 0..10 {
            assert_eq!(match_gpg(&entry, &gpg).unwrap(), first);
        }
    }

    #[test]
    fn test_first_ssh_entry_wins() {
        let ssh = vec![
            SshHostEntry::new("other", "~/.ssh/id0", "o@x.com"),
            SshHostEntry::new("x", "~/.ssh/idA", "a@x.com"),
            SshHostEntry::new("x", "~/.ssh/idB", "b@x.com"),
        ];
        for _ in 0..10 {
            let found = match_ssh(&remote("x"), &ssh).unwrap();
            assert_eq!(found.identity_file_path, "~/.ssh/idA");
        }
    }

    #[test]
    fn test_unmatched_ssh_host() {
        let ssh = vec![SshHostEntry::new("github.com", "~/.ssh/id", "a@x.com")];
        assert_eq!(match_ssh(&remote("gitlab.com"), &ssh), None);
        assert_eq!(match_ssh(&remote("github.com"), &[]), None);
    }

    #[test]
    fn test_ssh_alias_is_matched_verbatim() {
        let ssh = vec![SshHostEntry::new("GitHub.com", "~/.ssh/id", "a@x.com")];
        assert_eq!(match_ssh(&remote("github.com"), &ssh), None);
    }
}

use std::fs;
use std::io::BufReader;
use std::path::Path;

use ssh2_config::{ParseRule, SshConfig};
use tracing::{debug, info};

use crate::error::{GitIdError, Result};
use crate::models::{SshHostEntry, SshHostEntryBuilder};
use crate::utils::paths::{expand_tilde, public_key_path};
use crate::utils::regex::EMAIL_REGEX;

/// Read all host entries from the SSH client config at `path`
///
/// A missing config yields no entries. Each identity file's `.pub` companion
/// must be readable.
pub fn read_ssh_hosts(path: &Path) -> Result<Vec<SshHostEntry>> {
    info!("Reading ssh configuration...");

    if !path.exists() {
        debug!(path = %path.display(), "SSH config not found, no hosts");
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    validate_ssh_config(path, &content)?;

    let entries = parse_ssh_config(&content, read_public_key_email)?;
    debug!(count = entries.len(), "Read ssh host entries");
    Ok(entries)
}

/// Reject configs the ssh2-config parser cannot read
fn validate_ssh_config(path: &Path, content: &str) -> Result<()> {
    let mut reader = BufReader::new(content.as_bytes());
    SshConfig::default()
        .parse(&mut reader, ParseRule::ALLOW_UNKNOWN_FIELDS | ParseRule::ALLOW_UNSUPPORTED_FIELDS)
        .map_err(|e| GitIdError::SshConfig {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    Ok(())
}

/// Scan SSH config content in file order
///
/// Every `IdentityFile` line produces one entry per alias of the enclosing
/// `Host` line. `email_for` resolves the identity file to an email address.
pub fn parse_ssh_config<F>(content: &str, mut email_for: F) -> Result<Vec<SshHostEntry>>
where
    F: FnMut(&str) -> Result<String>,
{
    let mut entries = Vec::new();
    let mut hosts: Vec<String> = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some((key, value)) = split_directive(trimmed) else {
            continue;
        };

        match key.to_lowercase().as_str() {
            "host" => {
                // Can have multiple hosts on one line; wildcards never match a remote verbatim
                hosts = value
                    .split_whitespace()
                    .filter(|h| !h.contains(['*', '?', '!']))
                    .map(str::to_string)
                    .collect();
            }
            "match" => hosts.clear(),
            "identityfile" if !hosts.is_empty() => {
                let identity_file = unquote(value);
                let email = email_for(&identity_file)?;
                for host in &hosts {
                    entries.push(
                        SshHostEntryBuilder::new(host.clone())
                            .identity_file(identity_file.clone())
                            .email(email.clone())
                            .build(),
                    );
                }
            }
            _ => {}
        }
    }

    Ok(entries)
}

/// Split `Key value` or `Key=value`
fn split_directive(line: &str) -> Option<(&str, &str)> {
    let idx = line.find(|c: char| c.is_whitespace() || c == '=')?;
    let (key, rest) = line.split_at(idx);
    let value = rest.trim_start().strip_prefix('=').unwrap_or(rest.trim_start()).trim();
    if value.is_empty() {
        None
    } else {
        Some((key, value))
    }
}

fn unquote(value: &str) -> String {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
        .to_string()
}

/// Read `<identity_file>.pub` and pull the email from its comment
fn read_public_key_email(identity_file: &str) -> Result<String> {
    let path = public_key_path(&expand_tilde(identity_file));
    let content = fs::read_to_string(&path).map_err(|source| GitIdError::PublicKey {
        path: path.clone(),
        source,
    })?;
    Ok(email_from_public_key(&content))
}

/// First email address in the comment field of a public key line
///
/// Empty when the comment carries no address.
pub fn email_from_public_key(content: &str) -> String {
    let first_line = content.lines().find(|l| !l.trim().is_empty()).unwrap_or_default();
    let comment = first_line.split_whitespace().skip(2).collect::<Vec<_>>().join(" ");
    EMAIL_REGEX
        .find(&comment)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
# Personal
Host github.com
    HostName github.com
    User git
    IdentityFile ~/.ssh/id_personal

Host github-work gitlab-work
    HostName github.com
    IdentityFile=~/.ssh/id_work

Host *
    IdentityFile ~/.ssh/id_default

Host github.com
    IdentityFile ~/.ssh/id_second
"#;

    fn fake_email(identity: &str) -> Result<String> {
        Ok(format!("{}@example.com", identity.rsplit('/').next().unwrap_or_default()))
    }

    #[test]
    fn test_entries_in_file_order() {
        let entries = parse_ssh_config(CONFIG, fake_email).unwrap();
        let hosts: Vec<&str> = entries.iter().map(|e| e.hostname.as_str()).collect();
        assert_eq!(hosts, vec!["github.com", "github-work", "gitlab-work", "github.com"]);
        assert_eq!(entries[0].identity_file_path, "~/.ssh/id_personal");
        assert_eq!(entries[0].email, "id_personal@example.com");
        assert_eq!(entries[3].identity_file_path, "~/.ssh/id_second");
    }

    #[test]
    fn test_multi_alias_host_shares_identity() {
        let entries = parse_ssh_config(CONFIG, fake_email).unwrap();
        assert_eq!(entries[1].identity_file_path, "~/.ssh/id_work");
        assert_eq!(entries[2].identity_file_path, "~/.ssh/id_work");
    }

    #[test]
    fn test_identity_outside_host_is_ignored() {
        let content = "IdentityFile ~/.ssh/id_global\nMatch host x\n    IdentityFile ~/.ssh/id_match\n";
        let entries = parse_ssh_config(content, fake_email).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_email_lookup_failure_propagates() {
        let err = parse_ssh_config(CONFIG, |_| Err(GitIdError::validation("unreadable"))).unwrap_err();
        assert!(matches!(err, GitIdError::Validation(_)));
    }

    #[test]
    fn test_email_from_public_key() {
        assert_eq!(
            email_from_public_key("ssh-ed25519 AAAAC3NzaC1lZDI1NTE5AAAA alice@example.com\n"),
            "alice@example.com"
        );
        assert_eq!(email_from_public_key("ssh-ed25519 AAAAC3NzaC1lZDI1NTE5AAAA laptop\n"), "");
        assert_eq!(email_from_public_key("ssh-rsa AAAAB3Nza\n"), "");
    }

    #[test]
    fn test_missing_config_has_no_hosts() {
        let dir = tempfile::tempdir().unwrap();
        let entries = read_ssh_hosts(&dir.path().join("config")).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_reads_public_key_next_to_identity() {
        let dir = tempfile::tempdir().unwrap();
        let identity = dir.path().join("id_test");
        fs::write(dir.path().join("id_test.pub"), "ssh-ed25519 AAAA bob@example.org\n").unwrap();
        let config = dir.path().join("config");
        fs::write(&config, format!("Host example.org\n    IdentityFile {}\n", identity.display())).unwrap();

        let entries = read_ssh_hosts(&config).unwrap();
        assert_eq!(
            entries,
            vec![SshHostEntry::new("example.org", identity.display().to_string(), "bob@example.org")]
        );
    }

    #[test]
    fn test_unreadable_public_key_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("config");
        fs::write(&config, "Host example.org\n    IdentityFile /nonexistent/gitid/id_none\n").unwrap();

        let err = read_ssh_hosts(&config).unwrap_err();
        assert!(matches!(err, GitIdError::PublicKey { .. }));
    }
}

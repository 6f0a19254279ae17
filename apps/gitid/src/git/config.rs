//! Git config reading
//!
//! A single-pass line scan over the INI-like git config format, collecting the
//! `[user]` identity and the SSH remotes of one file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{GitIdError, Result};
use crate::git::url::is_http_url;
use crate::models::{ConfigScope, GitIdentityEntry, GitRemote};
use crate::utils::regex::GIT_SECTION_REGEX;

/// Section the scanner is currently inside
enum Section {
    User,
    Remote(String),
    Other,
}

/// Read a git identity entry from a config file
pub fn read_git_config(path: &Path, scope: ConfigScope) -> Result<GitIdentityEntry> {
    let content = fs::read_to_string(path)?;
    parse_git_config(path, scope, &content)
}

/// Parse git config content read from `path`
pub fn parse_git_config(path: &Path, scope: ConfigScope, content: &str) -> Result<GitIdentityEntry> {
    let mut builder = GitIdentityEntry::builder(path, scope);
    let mut section = Section::Other;

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }

        if trimmed.starts_with('[') {
            let caps = GIT_SECTION_REGEX
                .captures(trimmed)
                .ok_or_else(|| GitIdError::git_config(path, index + 1, format!("malformed section header '{}'", trimmed)))?;
            let name = caps.name("section").map(|m| m.as_str().to_lowercase()).unwrap_or_default();
            let subsection = caps.name("subsection").map(|m| m.as_str().to_string());

            section = match (name.as_str(), subsection) {
                ("user", None) => Section::User,
                ("remote", Some(remote_name)) => Section::Remote(remote_name),
                _ => Section::Other,
            };
            continue;
        }

        let Some((key, value)) = trimmed.split_once('=') else {
            continue;
        };
        let key = key.trim().to_lowercase();
        let value = parse_value(value);

        match &section {
            Section::User => {
                builder = match key.as_str() {
                    "name" => builder.name(value),
                    "email" => builder.email(value),
                    "signingkey" => builder.signing_key(value),
                    _ => builder,
                };
            }
            Section::Remote(remote_name) if key == "url" => {
                if is_http_url(&value) {
                    debug!(remote = %remote_name, url = %value, "Skipping HTTP remote");
                    continue;
                }
                match GitRemote::new(remote_name.clone(), value.clone()) {
                    Some(remote) => builder = builder.remote(remote),
                    None => debug!(remote = %remote_name, url = %value, "Skipping remote without an SSH host"),
                }
            }
            _ => {}
        }
    }

    Ok(builder.build())
}

/// Decode a raw value the way git does
///
/// Double quotes are removed and may enclose `;`/`#` or edge whitespace. An
/// unquoted `;` or `#` starts a comment. Backslash escapes `\"`, `\\`, `\n`,
/// `\t` and `\b` are decoded.
fn parse_value(raw: &str) -> String {
    let mut value = String::new();
    // Length up to the last character that must survive trimming
    let mut keep = 0;
    let mut quoted = false;
    let mut chars = raw.trim_start().chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                quoted = !quoted;
                continue;
            }
            ';' | '#' if !quoted => break,
            '\\' => match chars.next() {
                Some('n') => value.push('\n'),
                Some('t') => value.push('\t'),
                Some('b') => {
                    value.pop();
                }
                Some(other) => value.push(other),
                None => {}
            },
            c if c.is_whitespace() && !quoted => {
                value.push(c);
                continue;
            }
            c => value.push(c),
        }
        keep = value.len();
    }

    value.truncate(keep);
    value
}

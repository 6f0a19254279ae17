//! GPG keyring reading
//!
//! Lists the keyring in gpg's machine-readable colon format and keeps one
//! entry per key, named after its primary UID.

use std::process::Command;

use tracing::{debug, info};

use crate::config::GpgOptions;
use crate::error::{GitIdError, Result};
use crate::models::{GpgKeyEntry, GpgKeyEntryBuilder};
use crate::utils::regex::GPG_UID_REGEX;

/// Read all keyring entries, or none when GPG checking is disabled
pub fn read_gpg_keys(options: &GpgOptions) -> Result<Vec<GpgKeyEntry>> {
    if !options.enabled {
        debug!("GPG checking disabled, using an empty keyring");
        return Ok(Vec::new());
    }

    info!("Reading gpg configuration...");
    let output = list_keys(options)?;
    let entries = parse_key_listing(&output);
    debug!(count = entries.len(), "Read gpg keys");
    Ok(entries)
}

/// Run the keyring listing and return its stdout
fn list_keys(options: &GpgOptions) -> Result<String> {
    let program = which::which(&options.program).map_err(|_| GitIdError::GpgUnavailable {
        program: options.program.clone(),
    })?;

    let output = Command::new(&program)
        .args([options.keyring.list_flag(), "--with-colons", "--keyid-format=long"])
        .output()?;

    if !output.status.success() {
        return Err(GitIdError::GpgCommand {
            program: options.program.clone(),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Parse `--with-colons` keyring output
///
/// A `sec`/`pub` record starts a new key; the first `uid` record after it
/// names the key. Keys without a UID are dropped.
pub fn parse_key_listing(output: &str) -> Vec<GpgKeyEntry> {
    let mut entries = Vec::new();
    let mut current: Option<GpgKeyEntryBuilder> = None;

    for line in output.lines() {
        let fields: Vec<&str> = line.split(':').collect();
        match fields.first().copied() {
            Some("sec") | Some("pub") => {
                if let Some(builder) = current.take() {
                    push_built(&mut entries, builder);
                }
                let key_id = fields.get(4).copied().unwrap_or_default();
                current = Some(GpgKeyEntryBuilder::new(key_id));
            }
            Some("uid") => {
                let Some(builder) = current.as_mut() else {
                    continue;
                };
                let user_id = unescape(fields.get(9).copied().unwrap_or_default());
                let (name, email) = split_user_id(&user_id);
                builder.uid(name, email);
            }
            _ => {}
        }
    }

    if let Some(builder) = current {
        push_built(&mut entries, builder);
    }

    entries
}

fn push_built(entries: &mut Vec<GpgKeyEntry>, builder: GpgKeyEntryBuilder) {
    if !builder.has_uid() {
        debug!(key = builder.public_key(), "Dropping gpg key without a user id");
    }
    if let Some(entry) = builder.build() {
        entries.push(entry);
    }
}

/// Split `Name (comment) <email>` into name and email
fn split_user_id(user_id: &str) -> (String, String) {
    match GPG_UID_REGEX.captures(user_id) {
        Some(caps) => (
            caps.name("name").map(|m| m.as_str().trim().to_string()).unwrap_or_default(),
            caps.name("email").map(|m| m.as_str().to_string()).unwrap_or_default(),
        ),
        None => (user_id.trim().to_string(), String::new()),
    }
}

/// gpg escapes colons inside fields as `\x3a`
fn unescape(field: &str) -> String {
    field.replace("\\x3a", ":")
}

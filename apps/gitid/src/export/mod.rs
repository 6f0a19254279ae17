//! Identity summary export
//!
//! A reduced projection of git identity entries (name, email, signing key and
//! remote name → hostname) persisted as a compact JSON array. The config path
//! and full remote URLs are not part of the projection.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{GitIdError, Result};
use crate::models::GitIdentityEntry;

/// Projection of one identity entry
///
/// Fields are declared in key order so the JSON keys come out sorted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IdentitySummary {
    pub email: String,
    pub name: String,
    /// Remote name → derived hostname; a repeated remote name keeps its last URL
    pub remotes: BTreeMap<String, String>,
    pub signing_key: String,
}

impl From<&GitIdentityEntry> for IdentitySummary {
    fn from(entry: &GitIdentityEntry) -> Self {
        Self {
            email: entry.email.clone(),
            name: entry.name.clone(),
            remotes: entry
                .remotes
                .iter()
                .map(|r| (r.remote_name().to_string(), r.hostname().to_string()))
                .collect(),
            signing_key: entry.signing_key.clone(),
        }
    }
}

/// Distinct summaries of a set of entries
pub fn summarize<'a>(entries: impl IntoIterator<Item = &'a GitIdentityEntry>) -> BTreeSet<IdentitySummary> {
    entries.into_iter().map(IdentitySummary::from).collect()
}

/// Serialize summaries as a compact JSON array
pub fn to_json(summaries: &BTreeSet<IdentitySummary>) -> Result<String> {
    Ok(serde_json::to_string(summaries)?)
}

/// Parse a JSON array of summaries
pub fn from_json(json: &str) -> Result<BTreeSet<IdentitySummary>> {
    Ok(serde_json::from_str(json)?)
}

/// Merge `summaries` into the file at `path`, creating it when absent
pub fn write_to_file(path: &Path, summaries: BTreeSet<IdentitySummary>) -> Result<BTreeSet<IdentitySummary>> {
    if path.is_dir() {
        return Err(GitIdError::validation(format!(
            "Output path {} is a directory",
            path.display()
        )));
    }

    let mut merged = if path.exists() {
        let existing = from_json(&fs::read_to_string(path)?)?;
        debug!(count = existing.len(), path = %path.display(), "Read existing identity summaries");
        existing
    } else {
        BTreeSet::new()
    };
    merged.extend(summaries);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, to_json(&merged)?)?;
    info!(count = merged.len(), path = %path.display(), "Wrote identity summaries");

    Ok(merged)
}

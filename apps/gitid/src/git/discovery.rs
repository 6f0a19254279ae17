//! Locating git config files on disk

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::ToolConfig;
use crate::error::{GitIdError, Result};
use crate::git::config::read_git_config;
use crate::models::{ConfigScope, GitIdentityEntry};
use crate::utils::paths::{absolutize, home_dir};

/// Find `.git/config` files at `root` and, when `recursive`, below it
///
/// Traversal is sorted by file name so the order is stable between runs.
pub fn discover_config_paths(root: &Path, recursive: bool) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    let mut paths = Vec::new();

    let candidate = root.join(".git").join("config");
    if candidate.is_file() {
        seen.insert(candidate.clone());
        paths.push(candidate);
    }

    if recursive {
        let mut walker = WalkDir::new(root).follow_links(false).sort_by_file_name().into_iter();

        while let Some(entry) = walker.next() {
            let Ok(entry) = entry else {
                continue;
            };
            if !entry.file_type().is_dir() || entry.file_name() != ".git" {
                continue;
            }
            // Nothing below a .git directory is another repository
            walker.skip_current_dir();

            let config = entry.path().join("config");
            if config.is_file() && seen.insert(config.clone()) {
                debug!(path = %config.display(), "Discovered git config");
                paths.push(config);
            }
        }
    }

    paths
}

/// Path of the user's global git config
pub fn global_config_path() -> Option<PathBuf> {
    home_dir().map(|home| home.join(".gitconfig"))
}

/// Discover and read every git identity entry the configuration asks for
///
/// The global entry, when requested and present, comes first.
pub fn read_identity_entries(config: &ToolConfig) -> Result<Vec<GitIdentityEntry>> {
    info!("Reading git repo configuration files...");

    let mut located: Vec<(PathBuf, ConfigScope)> = Vec::new();

    if config.include_global {
        match global_config_path() {
            Some(path) if path.is_file() => located.push((path, ConfigScope::Global)),
            Some(path) => warn!(path = %path.display(), "Global git config not found, skipping"),
            None => warn!("Could not find home directory, skipping global git config"),
        }
    }

    let cwd = std::env::current_dir()?;
    let root = absolutize(&config.root, &cwd);
    debug!(root = %root.display(), "Searching for git repositories");

    located.extend(
        discover_config_paths(&root, config.recursive)
            .into_iter()
            .map(|path| (path, ConfigScope::Repository)),
    );

    if located.is_empty() {
        return Err(GitIdError::NoRepositoryFound { cwd: root });
    }

    located
        .iter()
        .map(|(path, scope)| read_git_config(path, *scope))
        .collect()
}

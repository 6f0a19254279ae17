//! Path utilities for gitid

use std::path::{Component, Path, PathBuf};

/// Expand tilde (~) to the user's home directory
///
/// Paths without a leading `~` are returned unchanged, as are `~` paths when
/// no home directory can be determined.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = home_dir() {
            return home.join(stripped);
        }
    } else if path == "~" {
        if let Some(home) = home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}

/// Get the user's home directory
///
/// Uses the `home` crate, falls back to the directories crate otherwise
pub fn home_dir() -> Option<PathBuf> {
    home::home_dir().or_else(|| directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf()))
}

/// Append `.pub` to an identity file path
pub fn public_key_path(identity_file: &Path) -> PathBuf {
    let mut os = identity_file.as_os_str().to_os_string();
    os.push(".pub");
    PathBuf::from(os)
}

/// Name of the repository directory owning a `<repo>/.git/config` path
///
/// Returns None when the path has fewer than three components.
pub fn repo_folder_name(config_path: &Path) -> Option<String> {
    config_path
        .parent()
        .and_then(Path::parent)
        .and_then(Path::file_name)
        .map(|n| n.to_string_lossy().to_string())
}

/// Resolve `path` against `base` and drop `.` / `..` components
///
/// Purely lexical; symlinks are left alone.
pub fn absolutize(path: &Path, base: &Path) -> PathBuf {
    let joined = if path.is_absolute() { path.to_path_buf() } else { base.join(path) };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

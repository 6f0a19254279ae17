//! Custom error types for gitid
//!
//! Every condition that aborts a run is a variant here. Mismatches and
//! unresolved references are not errors; they become report lines.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for gitid operations
#[derive(Error, Debug)]
pub enum GitIdError {
    /// More than one keyring entry carries the signing key id
    #[error("Multiple gpg entries match the signing key {signing_key}, which is not allowed")]
    AmbiguousKey { signing_key: String },

    /// No git config location was discovered
    #[error("Could not locate a git repo in the working directory ({})", cwd.display())]
    NoRepositoryFound { cwd: PathBuf },

    /// Malformed git config file
    #[error("Git config error in {} (line {line}): {message}", path.display())]
    GitConfig {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// SSH client config rejected by the parser
    #[error("Failed to parse SSH config {}: {message}", path.display())]
    SshConfig { path: PathBuf, message: String },

    /// Public key next to an IdentityFile could not be read
    #[error("Could not read public key {}: {source}", path.display())]
    PublicKey {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// GPG binary not found on PATH
    #[error("GPG program '{program}' was not found on PATH")]
    GpgUnavailable { program: String },

    /// GPG keyring listing exited unsuccessfully
    #[error("GPG command '{program}' failed ({status}): {stderr}")]
    GpgCommand {
        program: String,
        status: String,
        stderr: String,
    },

    /// IO-related errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),
}

impl GitIdError {
    /// Create an ambiguous key error
    pub fn ambiguous_key(signing_key: impl Into<String>) -> Self {
        Self::AmbiguousKey {
            signing_key: signing_key.into(),
        }
    }

    /// Create a git config error
    pub fn git_config(path: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        Self::GitConfig {
            path: path.into(),
            line,
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Result type alias using GitIdError
pub type Result<T> = std::result::Result<T, GitIdError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambiguous_key_error() {
        let err = GitIdError::ambiguous_key("ABCDEF0123456789");
        assert_eq!(
            err.to_string(),
            "Multiple gpg entries match the signing key ABCDEF0123456789, which is not allowed"
        );
    }

    #[test]
    fn test_no_repository_error_names_directory() {
        let err = GitIdError::NoRepositoryFound {
            cwd: PathBuf::from("/tmp/nowhere"),
        };
        assert!(err.to_string().contains("/tmp/nowhere"));
    }

    #[test]
    fn test_git_config_error() {
        let err = GitIdError::git_config("/repo/.git/config", 3, "unterminated section header");
        assert_eq!(
            err.to_string(),
            "Git config error in /repo/.git/config (line 3): unterminated section header"
        );
    }

    #[test]
    fn test_validation_error() {
        let err = GitIdError::validation("Output path is a directory");
        assert_eq!(err.to_string(), "Validation error: Output path is a directory");
    }
}

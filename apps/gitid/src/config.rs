//! Run configuration
//!
//! Folded from command-line flags (with environment fallbacks) before any
//! source is read.

use std::path::PathBuf;

use crate::utils::paths::expand_tilde;

pub const DEFAULT_SSH_CONFIG: &str = "~/.ssh/config";
pub const DEFAULT_GPG_PROGRAM: &str = "gpg";

/// Which keyring listing to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GpgKeyring {
    #[default]
    Secret,
    Public,
}

impl GpgKeyring {
    pub fn list_flag(&self) -> &'static str {
        match self {
            GpgKeyring::Secret => "--list-secret-keys",
            GpgKeyring::Public => "--list-keys",
        }
    }
}

/// GPG reading options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GpgOptions {
    /// Skip the keyring entirely
    pub enabled: bool,
    pub program: String,
    pub keyring: GpgKeyring,
}

impl Default for GpgOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            program: DEFAULT_GPG_PROGRAM.to_string(),
            keyring: GpgKeyring::default(),
        }
    }
}

/// Everything the readers need to locate their sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    /// Directory searched for `.git/config`
    pub root: PathBuf,
    pub recursive: bool,
    pub include_global: bool,
    pub ssh_config: PathBuf,
    pub gpg: GpgOptions,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            recursive: false,
            include_global: false,
            ssh_config: expand_tilde(DEFAULT_SSH_CONFIG),
            gpg: GpgOptions::default(),
        }
    }
}

//! Git functionality for gitid
//!
//! - Locating repository and global config files
//! - Reading identity and remotes from a config file
//! - Deriving SSH hosts from remote URLs

pub mod config;
pub mod discovery;
pub mod url;

pub use config::{parse_git_config, read_git_config};
pub use discovery::{discover_config_paths, read_identity_entries};

//! SSH functionality for gitid
//!
//! This module reads `Host` aliases and their identity files from the SSH
//! client config.

pub mod config;

pub use config::{email_from_public_key, parse_ssh_config, read_ssh_hosts};

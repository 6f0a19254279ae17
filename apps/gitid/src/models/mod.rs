//! Identity records read from git, GPG and SSH configuration
//!
//! All records are immutable once built. Each has a builder that is consumed by
//! `build()`, so no field can leak from one record into the next.

mod git;
mod gpg;
mod ssh;

pub use git::{ConfigScope, GitIdentityEntry, GitIdentityEntryBuilder, GitRemote};
pub use gpg::{GpgKeyEntry, GpgKeyEntryBuilder};
pub use ssh::{SshHostEntry, SshHostEntryBuilder};

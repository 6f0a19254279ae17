use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::config::{GpgKeyring, GpgOptions, ToolConfig, DEFAULT_GPG_PROGRAM, DEFAULT_SSH_CONFIG};
use crate::utils::paths::expand_tilde;

#[derive(Parser, Debug)]
#[command(
    name = "gitid",
    about = "Reconcile git identities with the GPG keyring and SSH client config",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare git identities against gpg keys and ssh hosts
    Check(CheckArgs),

    /// Export a JSON summary of the discovered git identities
    Write(WriteArgs),
}

/// Where to look for git configuration
#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Directory to check (defaults to the current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Also check every git repository below the directory
    #[arg(short, long)]
    pub recursive: bool,

    /// Include the global ~/.gitconfig
    #[arg(short, long)]
    pub global: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// SSH client config to read
    #[arg(long, env = "GITID_SSH_CONFIG", default_value = DEFAULT_SSH_CONFIG)]
    pub ssh_config: String,

    /// GPG program used to list the keyring
    #[arg(long, env = "GITID_GPG_PROGRAM", default_value = DEFAULT_GPG_PROGRAM)]
    pub gpg_program: String,

    /// Read public keys instead of secret keys
    #[arg(long)]
    pub public_keys: bool,

    /// Skip the gpg keyring
    #[arg(long)]
    pub no_gpg: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct WriteArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Merge into this JSON file instead of printing
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ScanArgs {
    pub fn tool_config(&self) -> ToolConfig {
        ToolConfig {
            root: self.path.clone(),
            recursive: self.recursive,
            include_global: self.global,
            ..ToolConfig::default()
        }
    }
}

impl CheckArgs {
    pub fn tool_config(&self) -> ToolConfig {
        ToolConfig {
            ssh_config: expand_tilde(&self.ssh_config),
            gpg: GpgOptions {
                enabled: !self.no_gpg,
                program: self.gpg_program.clone(),
                keyring: if self.public_keys {
                    GpgKeyring::Public
                } else {
                    GpgKeyring::Secret
                },
            },
            ..self.scan.tool_config()
        }
    }
}

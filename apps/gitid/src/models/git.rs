use std::path::PathBuf;

use serde::Serialize;

use crate::git::url::ssh_hostname;
use crate::utils::paths::repo_folder_name;

/// Which git configuration scope an entry was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigScope {
    /// A repository's `.git/config`
    Repository,
    /// The user's `~/.gitconfig`
    Global,
}

/// One SSH-style remote URL declared under `[remote "<name>"]`
///
/// The hostname is derived from the URL once at construction, so two remotes
/// with the same name and URL always compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GitRemote {
    remote_name: String,
    url: String,
    hostname: String,
}

impl GitRemote {
    /// Returns None for URLs without an SSH host (HTTP(S), local paths)
    pub fn new(remote_name: impl Into<String>, url: impl Into<String>) -> Option<Self> {
        let url = url.into();
        let hostname = ssh_hostname(&url)?;
        Some(Self {
            remote_name: remote_name.into(),
            url,
            hostname,
        })
    }

    pub fn remote_name(&self) -> &str {
        &self.remote_name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }
}

/// Identity settings of one git configuration scope
///
/// Empty strings mean "unset".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GitIdentityEntry {
    pub path: PathBuf,
    pub scope: ConfigScope,
    pub name: String,
    pub email: String,
    pub signing_key: String,
    /// In file order
    pub remotes: Vec<GitRemote>,
}

impl GitIdentityEntry {
    pub fn builder(path: impl Into<PathBuf>, scope: ConfigScope) -> GitIdentityEntryBuilder {
        GitIdentityEntryBuilder::new(path, scope)
    }

    pub fn is_global(&self) -> bool {
        self.scope == ConfigScope::Global
    }

    /// `GLOBAL` for the global scope, otherwise the repository folder name
    pub fn display_name(&self) -> String {
        match self.scope {
            ConfigScope::Global => "GLOBAL".to_string(),
            ConfigScope::Repository => repo_folder_name(&self.path)
                .unwrap_or_else(|| self.path.to_string_lossy().to_string()),
        }
    }
}

/// Accumulates the fields of one config file
///
/// Created fresh per file and consumed by `build()`.
#[derive(Debug)]
pub struct GitIdentityEntryBuilder {
    path: PathBuf,
    scope: ConfigScope,
    name: String,
    email: String,
    signing_key: String,
    remotes: Vec<GitRemote>,
}

impl GitIdentityEntryBuilder {
    pub fn new(path: impl Into<PathBuf>, scope: ConfigScope) -> Self {
        Self {
            path: path.into(),
            scope,
            name: String::new(),
            email: String::new(),
            signing_key: String::new(),
            remotes: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn signing_key(mut self, signing_key: impl Into<String>) -> Self {
        self.signing_key = signing_key.into();
        self
    }

    pub fn remote(mut self, remote: GitRemote) -> Self {
        self.remotes.push(remote);
        self
    }

    pub fn build(self) -> GitIdentityEntry {
        GitIdentityEntry {
            path: self.path,
            scope: self.scope,
            name: self.name,
            email: self.email,
            signing_key: self.signing_key,
            remotes: self.remotes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_hostname_is_derived() {
        let remote = GitRemote::new("origin", "git@github.com:a/b.git").unwrap();
        assert_eq!(remote.hostname(), "github.com");
        assert_eq!(remote.remote_name(), "origin");
        assert_eq!(remote.url(), "git@github.com:a/b.git");
    }

    #[test]
    fn test_remote_rejects_https() {
        assert!(GitRemote::new("origin", "https://github.com/a/b.git").is_none());
    }

    #[test]
    fn test_remote_equality_by_name_and_url() {
        let a = GitRemote::new("origin", "git@host:a/b.git").unwrap();
        let b = GitRemote::new("origin", "git@host:a/b.git").unwrap();
        let c = GitRemote::new("upstream", "git@host:a/b.git").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_builder_defaults_to_unset() {
        let entry = GitIdentityEntry::builder("/r/.git/config", ConfigScope::Repository).build();
        assert_eq!(entry.name, "");
        assert_eq!(entry.email, "");
        assert_eq!(entry.signing_key, "");
        assert!(entry.remotes.is_empty());
    }

    #[test]
    fn test_display_name() {
        let repo = GitIdentityEntry::builder("/home/a/Example/RepoName/.git/config", ConfigScope::Repository)
            .build();
        assert_eq!(repo.display_name(), "RepoName");

        let global = GitIdentityEntry::builder("/home/a/.gitconfig", ConfigScope::Global).build();
        assert_eq!(global.display_name(), "GLOBAL");
        assert!(global.is_global());
    }
}

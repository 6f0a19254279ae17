use serde::Serialize;

/// One `Host` alias with an identity file from the SSH client config
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SshHostEntry {
    /// The `Host` alias as written, not a resolved DNS name
    pub hostname: String,
    pub identity_file_path: String,
    /// Address found in the comment of `<identity_file_path>.pub`
    pub email: String,
}

impl SshHostEntry {
    pub fn new(
        hostname: impl Into<String>,
        identity_file_path: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            hostname: hostname.into(),
            identity_file_path: identity_file_path.into(),
            email: email.into(),
        }
    }
}

/// Builds one entry per `IdentityFile` line
#[derive(Debug)]
pub struct SshHostEntryBuilder {
    hostname: String,
    identity_file_path: String,
    email: String,
}

impl SshHostEntryBuilder {
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            identity_file_path: String::new(),
            email: String::new(),
        }
    }

    pub fn identity_file(mut self, path: impl Into<String>) -> Self {
        self.identity_file_path = path.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn build(self) -> SshHostEntry {
        SshHostEntry {
            hostname: self.hostname,
            identity_file_path: self.identity_file_path,
            email: self.email,
        }
    }
}

use serde::Serialize;

/// One key from the local keyring, with its primary UID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GpgKeyEntry {
    /// Long-format key id
    pub public_key: String,
    pub name: String,
    pub email: String,
}

impl GpgKeyEntry {
    pub fn new(public_key: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Accumulates one keyring record while the listing is scanned
#[derive(Debug)]
pub struct GpgKeyEntryBuilder {
    public_key: String,
    uid: Option<(String, String)>,
}

impl GpgKeyEntryBuilder {
    pub fn new(public_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            uid: None,
        }
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    pub fn has_uid(&self) -> bool {
        self.uid.is_some()
    }

    /// Record the UID; only the first (primary) one is kept
    pub fn uid(&mut self, name: impl Into<String>, email: impl Into<String>) -> &mut Self {
        if self.uid.is_none() {
            self.uid = Some((name.into(), email.into()));
        }
        self
    }

    /// None when the key never received a UID
    pub fn build(self) -> Option<GpgKeyEntry> {
        let (name, email) = self.uid?;
        Some(GpgKeyEntry {
            public_key: self.public_key,
            name,
            email,
        })
    }
}

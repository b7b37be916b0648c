use std::fmt;

use serde::{Deserialize, Serialize};

/// A user-named ssh connection profile.
///
/// Stored as `{ "name":"box", "user":"root", "ip":"10.0.0.2", "key":"/home/me/.ssh/id_ed25519" }`.
/// Keys missing from a stored object decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionRecord {
    pub name: String,
    pub user: String,
    #[serde(rename = "ip")]
    pub host: String,
    #[serde(rename = "key")]
    pub key_path: String,
}

impl ConnectionRecord {
    pub fn new(
        name: impl Into<String>,
        user: impl Into<String>,
        host: impl Into<String>,
        key_path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            user: user.into(),
            host: host.into(),
            key_path: key_path.into(),
        }
    }

    /// The `user@host` target handed to the ssh client.
    pub fn address(&self) -> String {
        format!("{}@{}", self.user, self.host)
    }
}

/// Verbose listing line: `name user@host key`.
impl fmt::Display for ConnectionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.address(), self.key_path)
    }
}

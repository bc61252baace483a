//! Typed identity payload returned by the university identity API.
//!
//! The payload is parsed once at the client boundary; downstream code
//! (role policy, reconciliation) operates on this typed contract and
//! never on raw JSON maps.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One identity snapshot from the remote service. Ephemeral: consumed by
/// reconciliation or discarded, never persisted as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteIdentityRecord {
    #[serde(default)]
    pub username: String,
    /// Remote primary identifier; falls back to username when absent
    #[serde(default)]
    pub tu_id: Option<String>,
    #[serde(default)]
    pub email: String,
    /// Thai display name, preferred for name splitting
    #[serde(default)]
    pub displayname_th: String,
    #[serde(default)]
    pub displayname_en: String,
    /// "student" or "employee"; anything else maps to the default role
    #[serde(default, rename = "type")]
    pub user_type: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub faculty: String,
    #[serde(default)]
    pub organization: String,
    /// Provider-specific fields we carry but do not interpret
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl RemoteIdentityRecord {
    /// The unique id this record carries in the remote system
    pub fn external_id(&self) -> &str {
        self.tu_id.as_deref().unwrap_or(&self.username)
    }

    /// Split the preferred display name into (given, family) on the first
    /// space. A single-token name becomes (name, ""); no display name at
    /// all becomes ("", "").
    pub fn given_family_names(&self) -> (String, String) {
        let name = if !self.displayname_th.is_empty() {
            self.displayname_th.as_str()
        } else {
            self.displayname_en.as_str()
        };

        match name.split_once(' ') {
            Some((given, family)) => (given.to_string(), family.to_string()),
            None if !name.is_empty() => (name.to_string(), String::new()),
            None => (String::new(), String::new()),
        }
    }
}

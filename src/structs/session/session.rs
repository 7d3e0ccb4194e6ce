use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::enums::session_status::SessionStatus;
use crate::structs::session::session_identity::SessionIdentity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub id: String,

    pub name: String,

    pub status: SessionStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub me: Option<SessionIdentity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    /// Fields this crate does not interpret, kept so snapshots forward unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Session {
    pub fn new(id: &str, name: &str, status: SessionStatus) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            status,
            me: None,
            webhook: None,
            config: None,
            created_at: None,
            updated_at: None,
            extra: Map::new(),
        }
    }

    pub fn is_paired(&self) -> bool {
        self.me.is_some()
    }

    pub fn display_name(&self) -> String {
        match &self.me {
            Some(identity) => format!("{} ({})", self.name, identity.label()),
            None => self.name.clone(),
        }
    }
}

use serde::{Deserialize, Serialize};
use crate::structs::session::session::Session;

/// The remote list endpoint answers either a bare array or a `{ sessions, total }` envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SessionsListResponse {
    Bare(Vec<Session>),
    Wrapped {
        #[serde(default)]
        sessions: Vec<Session>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        total: Option<usize>,
    },
}

impl SessionsListResponse {
    pub fn into_sessions(self) -> Vec<Session> {
        match self {
            Self::Bare(sessions) | Self::Wrapped { sessions, .. } => sessions,
        }
    }
}

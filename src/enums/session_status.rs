use std::fmt;
use serde::{Deserialize, Serialize};

/// Lifecycle status as reported by the remote service. Never computed locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    Starting,
    ScanQrCode,
    Working,
    Failed,
    Stopped,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Starting => "STARTING",
            Self::ScanQrCode => "SCAN_QR_CODE",
            Self::Working => "WORKING",
            Self::Failed => "FAILED",
            Self::Stopped => "STOPPED",
        }
    }

    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Starting)
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Starting => "⏳",
            Self::ScanQrCode => "📱",
            Self::Working => "✅",
            Self::Failed => "❌",
            Self::Stopped => "⏹️",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_remote_wire_names() {
        let status: SessionStatus = serde_json::from_str("\"SCAN_QR_CODE\"").unwrap();
        assert_eq!(status, SessionStatus::ScanQrCode);
        assert_eq!(serde_json::to_string(&SessionStatus::Working).unwrap(), "\"WORKING\"");
    }

    #[test]
    fn only_starting_is_transient() {
        assert!(SessionStatus::Starting.is_transient());
        assert!(!SessionStatus::ScanQrCode.is_transient());
        assert!(!SessionStatus::Failed.is_transient());
    }

    #[test]
    fn rejects_unknown_status() {
        assert!(serde_json::from_str::<SessionStatus>("\"PAUSED\"").is_err());
    }
}

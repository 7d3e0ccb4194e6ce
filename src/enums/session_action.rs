use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionAction {
    Start,
    Stop,
    Restart,
    Logout,
}

impl SessionAction {
    pub const ALL: [SessionAction; 4] = [Self::Start, Self::Stop, Self::Restart, Self::Logout];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Restart => "restart",
            Self::Logout => "logout",
        }
    }

    /// Start and restart leave the session STARTING for a while; the others settle immediately.
    pub fn needs_status_poll(&self) -> bool {
        matches!(self, Self::Start | Self::Restart)
    }

    pub fn failure_message(&self) -> String {
        format!("Failed to {} session", self.as_str())
    }
}

impl fmt::Display for SessionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SessionAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| format!("unknown session action '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_path_segments() {
        assert_eq!("restart".parse::<SessionAction>().unwrap(), SessionAction::Restart);
        assert!("pause".parse::<SessionAction>().is_err());
    }

    #[test]
    fn only_start_and_restart_poll() {
        let polled: Vec<_> = SessionAction::ALL.into_iter().filter(SessionAction::needs_status_poll).collect();
        assert_eq!(polled, vec![SessionAction::Start, SessionAction::Restart]);
    }
}

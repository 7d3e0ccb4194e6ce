use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct PollingConfig {
    #[serde(default = "ConfigHelper::default_poll_interval_ms")]
    pub interval_ms: u64,

    #[serde(default = "ConfigHelper::default_max_poll_attempts")]
    pub max_attempts: u32,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_ms: ConfigHelper::default_poll_interval_ms(),
            max_attempts: ConfigHelper::default_max_poll_attempts(),
        }
    }
}

impl PollingConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_API_KEY_ENV: &str = "WAHA_API_KEY";
pub const BASE_URL_OVERRIDE_ENV: &str = "WAHA_BASE_URL";
pub const API_KEY_HEADER: &str = "X-Api-Key";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_PORT: u16 = 8080;
pub const SERVER_SHUTDOWN_GRACE_PERIOD_MS: u64 = 100;
pub const PROXY_API_PREFIX: &str = "/api/waha";
pub const MAX_SESSION_NAME_LENGTH: usize = 64;

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;
pub const DEFAULT_MAX_POLL_ATTEMPTS: u32 = 30;

pub const CONFIG_DIR_NAME: &str = "waha-dashboard";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub fn timeout_duration(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}

pub fn sleep_duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}

use std::path::{Path, PathBuf};
use std::fs;
use crate::config::constants::{BASE_URL_OVERRIDE_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{DashboardError, DashboardResult};
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# WAHA Dashboard Configuration

[remote]
# Base URL of the WAHA REST API (can be overridden with WAHA_BASE_URL)
base_url = "http://localhost:3000/api"

# Environment variable holding the API key sent as X-Api-Key.
# The key itself is never written to this file.
api_key_env = "WAHA_API_KEY"

# Per-request timeout towards the WAHA service
timeout_secs = 30

[server]
# Address the route proxy listens on
host = "127.0.0.1"
port = 8080

[polling]
# Status re-check cadence after start/restart
interval_ms = 1000
# Give up after this many checks if the session is still STARTING
max_attempts = 30
"#;

pub struct ConfigManager;

impl ConfigManager {
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    pub fn load() -> DashboardResult<Config> {
        let mut config = Self::load_from(&Self::default_path())?;
        Self::apply_overrides(&mut config, |key| std::env::var(key).ok());
        Self::validate_config(&config)?;
        Ok(config)
    }

    /// Read the file if it exists; defaults otherwise.
    pub fn load_from(path: &Path) -> DashboardResult<Config> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| DashboardError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn apply_overrides<F>(config: &mut Config, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(BASE_URL_OVERRIDE_ENV).filter(|v| !v.trim().is_empty()) {
            log::info!("🔧 Using WAHA base URL from {}", BASE_URL_OVERRIDE_ENV);
            config.remote.base_url = base_url;
        }
    }

    pub fn validate_config(config: &Config) -> DashboardResult<()> {
        let base_url = config.remote.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(DashboardError::config_error(
                "base_url must be an http(s) URL",
                Some("remote.base_url"),
                Some("e.g. http://localhost:3000/api"),
            ));
        }

        if config.polling.max_attempts == 0 {
            return Err(DashboardError::config_error(
                "max_attempts must be at least 1",
                Some("polling.max_attempts"),
                None,
            ));
        }

        if config.remote.api_key_env.trim().is_empty() {
            return Err(DashboardError::config_error(
                "api_key_env cannot be empty",
                Some("remote.api_key_env"),
                Some("use WAHA_API_KEY"),
            ));
        }

        Ok(())
    }

    pub fn api_key(config: &Config) -> DashboardResult<String> {
        Self::api_key_with(config, |key| std::env::var(key).ok())
    }

    pub fn api_key_with<F>(config: &Config, lookup: F) -> DashboardResult<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_name = &config.remote.api_key_env;
        lookup(env_name)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                DashboardError::config_error(
                    &format!("{} is not set", env_name),
                    Some("remote.api_key_env"),
                    Some(&format!("export {}=<your WAHA API key>", env_name)),
                )
            })
    }

    pub fn create_sample_config(path: &Path) -> DashboardResult<()> {
        if path.exists() {
            return Err(DashboardError::ConfigurationFileError {
                path: path.display().to_string(),
                reason: "file already exists".to_string(),
            });
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, SAMPLE_CONFIG)?;
        log::info!("📝 Sample configuration written to {}", path.display());
        Ok(())
    }
}

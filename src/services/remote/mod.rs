pub mod auth_api;
pub mod profile_api;
pub mod sessions_api;

use std::collections::HashMap;
use std::sync::Arc;
use crate::config::constants::{timeout_duration, API_KEY_HEADER};
use crate::services::http_client::ApiClient;
use crate::structs::config::remote_config::RemoteConfig;

pub fn remote_client(config: &RemoteConfig, api_key: &str) -> Arc<ApiClient> {
    let mut headers = HashMap::new();
    headers.insert(API_KEY_HEADER.to_string(), api_key.to_string());

    Arc::new(ApiClient::new(&config.base_url, headers).with_timeout(timeout_duration(config.timeout_secs)))
}

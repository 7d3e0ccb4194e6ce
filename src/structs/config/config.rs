use serde::{Deserialize, Serialize};
use crate::structs::config::polling_config::PollingConfig;
use crate::structs::config::remote_config::RemoteConfig;
use crate::structs::config::server_config::ServerConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub remote: RemoteConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub polling: PollingConfig,
}

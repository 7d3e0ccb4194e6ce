pub mod config;
pub mod polling_config;
pub mod remote_config;
pub mod server_config;

pub mod backends;
pub mod http_client;
pub mod remote;
pub mod session_store;

pub mod proxy_backend;
pub mod remote_backend;

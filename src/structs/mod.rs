pub mod backend_args;
pub mod cli;
pub mod config;
pub mod http;
pub mod session;

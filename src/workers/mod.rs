pub mod command_runner;
pub mod status_poller;

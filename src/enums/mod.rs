pub mod api_error;
pub mod commands;
pub mod session_command;
pub mod session_status;
pub mod session_action;

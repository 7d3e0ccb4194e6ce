pub mod create_session_data;
pub mod profile;
pub mod qr_code;
pub mod session;
pub mod session_config;
pub mod session_identity;
pub mod sessions_list_response;
pub mod sessions_view;
pub mod webhook_config;

pub mod abort;
pub mod api_response;
pub mod request_config;
pub mod response_body;

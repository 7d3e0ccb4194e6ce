use async_trait::async_trait;
use crate::enums::api_error::ApiError;
use crate::structs::session::create_session_data::CreateSessionData;
use crate::structs::session::profile::Profile;
use crate::structs::session::qr_code::QrCode;
use crate::structs::session::session::Session;

/// Transport the session store talks through.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionBackend: Send + Sync {
    async fn list(&self) -> Result<Vec<Session>, ApiError>;

    async fn create(&self, data: &CreateSessionData) -> Result<Session, ApiError>;

    async fn get(&self, name: &str) -> Result<Session, ApiError>;

    async fn start(&self, name: &str) -> Result<Session, ApiError>;

    async fn stop(&self, name: &str) -> Result<Session, ApiError>;

    async fn restart(&self, name: &str) -> Result<Session, ApiError>;

    async fn logout(&self, name: &str) -> Result<Session, ApiError>;

    async fn delete(&self, name: &str) -> Result<(), ApiError>;

    async fn qr_code(&self, name: &str) -> Result<QrCode, ApiError>;

    async fn profile(&self, name: &str) -> Result<Profile, ApiError>;
}

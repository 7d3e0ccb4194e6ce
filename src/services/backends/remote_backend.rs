use std::sync::Arc;
use async_trait::async_trait;
use crate::enums::api_error::ApiError;
use crate::services::http_client::ApiClient;
use crate::services::remote::auth_api::AuthApi;
use crate::services::remote::profile_api::ProfileApi;
use crate::services::remote::sessions_api::SessionsApi;
use crate::structs::session::create_session_data::CreateSessionData;
use crate::structs::session::profile::Profile;
use crate::structs::session::qr_code::QrCode;
use crate::structs::session::session::Session;
use crate::traits::session_backend::SessionBackend;

/// Talks to the WAHA service directly. Needs the API key, so server side only.
#[derive(Debug, Clone)]
pub struct RemoteBackend {
    sessions: SessionsApi,
    auth: AuthApi,
    profile: ProfileApi,
}

impl RemoteBackend {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            sessions: SessionsApi::new(Arc::clone(&client)),
            auth: AuthApi::new(Arc::clone(&client)),
            profile: ProfileApi::new(client),
        }
    }

    pub fn sessions(&self) -> &SessionsApi {
        &self.sessions
    }

    pub fn auth(&self) -> &AuthApi {
        &self.auth
    }

    pub fn profile_api(&self) -> &ProfileApi {
        &self.profile
    }
}

#[async_trait]
impl SessionBackend for RemoteBackend {
    async fn list(&self) -> Result<Vec<Session>, ApiError> {
        Ok(self.sessions.list().await?.data.into_sessions())
    }

    async fn create(&self, data: &CreateSessionData) -> Result<Session, ApiError> {
        Ok(self.sessions.create(data).await?.data)
    }

    async fn get(&self, name: &str) -> Result<Session, ApiError> {
        Ok(self.sessions.get(name).await?.data)
    }

    async fn start(&self, name: &str) -> Result<Session, ApiError> {
        Ok(self.sessions.start(name).await?.data)
    }

    async fn stop(&self, name: &str) -> Result<Session, ApiError> {
        Ok(self.sessions.stop(name).await?.data)
    }

    async fn restart(&self, name: &str) -> Result<Session, ApiError> {
        Ok(self.sessions.restart(name).await?.data)
    }

    async fn logout(&self, name: &str) -> Result<Session, ApiError> {
        Ok(self.sessions.logout(name).await?.data)
    }

    async fn delete(&self, name: &str) -> Result<(), ApiError> {
        self.sessions.delete(name).await?;
        Ok(())
    }

    async fn qr_code(&self, name: &str) -> Result<QrCode, ApiError> {
        Ok(self.auth.qr_code(name).await?.data)
    }

    async fn profile(&self, name: &str) -> Result<Profile, ApiError> {
        Ok(self.profile.get(name).await?.data)
    }
}

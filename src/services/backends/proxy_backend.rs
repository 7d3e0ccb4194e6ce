use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use serde_json::json;
use crate::config::constants::PROXY_API_PREFIX;
use crate::enums::api_error::ApiError;
use crate::services::http_client::ApiClient;
use crate::structs::http::request_config::RequestConfig;
use crate::structs::session::create_session_data::CreateSessionData;
use crate::structs::session::profile::Profile;
use crate::structs::session::qr_code::QrCode;
use crate::structs::session::session::Session;
use crate::structs::session::sessions_list_response::SessionsListResponse;
use crate::traits::session_backend::SessionBackend;

#[derive(Debug, Clone)]
pub struct ProxyBackend {
    client: Arc<ApiClient>,
}

impl ProxyBackend {
    pub fn new(endpoint: &str) -> Self {
        let base_url = format!("{}{}", endpoint.trim_end_matches('/'), PROXY_API_PREFIX);
        Self {
            client: Arc::new(ApiClient::new(&base_url, HashMap::new())),
        }
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    async fn action(&self, name: &str, action: &str) -> Result<Session, ApiError> {
        Ok(self
            .client
            .post(&format!("/sessions/{}/{}", name, action), &json!({}), RequestConfig::default())
            .await?
            .into_json()?
            .data)
    }
}

#[async_trait]
impl SessionBackend for ProxyBackend {
    async fn list(&self) -> Result<Vec<Session>, ApiError> {
        let response = self.client.get("/sessions", RequestConfig::default()).await?;
        Ok(response.into_json::<SessionsListResponse>()?.data.into_sessions())
    }

    async fn create(&self, data: &CreateSessionData) -> Result<Session, ApiError> {
        Ok(self.client.post("/sessions", data, RequestConfig::default()).await?.into_json()?.data)
    }

    async fn get(&self, name: &str) -> Result<Session, ApiError> {
        Ok(self
            .client
            .get(&format!("/sessions/{}", name), RequestConfig::default())
            .await?
            .into_json()?
            .data)
    }

    async fn start(&self, name: &str) -> Result<Session, ApiError> {
        self.action(name, "start").await
    }

    async fn stop(&self, name: &str) -> Result<Session, ApiError> {
        self.action(name, "stop").await
    }

    async fn restart(&self, name: &str) -> Result<Session, ApiError> {
        self.action(name, "restart").await
    }

    async fn logout(&self, name: &str) -> Result<Session, ApiError> {
        self.action(name, "logout").await
    }

    async fn delete(&self, name: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("/sessions/{}", name), RequestConfig::default()).await?;
        Ok(())
    }

    async fn qr_code(&self, name: &str) -> Result<QrCode, ApiError> {
        let response = self.client.get(&format!("/auth/{}/qr", name), RequestConfig::default()).await?;
        let content_type = response.header("content-type").map(str::to_string);
        Ok(QrCode::new(content_type.as_deref(), response.into_bytes().data))
    }

    async fn profile(&self, name: &str) -> Result<Profile, ApiError> {
        Ok(self
            .client
            .get(&format!("/profile/{}", name), RequestConfig::default())
            .await?
            .into_json()?
            .data)
    }
}

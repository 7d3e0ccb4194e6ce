use std::sync::Arc;
use serde_json::{json, Value};
use crate::enums::api_error::ApiError;
use crate::services::http_client::ApiClient;
use crate::structs::http::api_response::ApiResponse;
use crate::structs::http::request_config::RequestConfig;
use crate::structs::http::response_body::ResponseBody;
use crate::structs::session::create_session_data::CreateSessionData;
use crate::structs::session::session::Session;
use crate::structs::session::sessions_list_response::SessionsListResponse;

#[derive(Debug, Clone)]
pub struct SessionsApi {
    client: Arc<ApiClient>,
}

impl SessionsApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<ApiResponse<SessionsListResponse>, ApiError> {
        self.client.get("/sessions?all=true", RequestConfig::default()).await?.into_json()
    }

    /// Untyped variant of [`list`](Self::list) for callers that forward the body untouched.
    pub async fn list_raw(&self) -> Result<ApiResponse<Value>, ApiError> {
        self.client.get("/sessions?all=true", RequestConfig::default()).await?.into_json()
    }

    pub async fn create_raw(&self, data: &Value) -> Result<ApiResponse<Value>, ApiError> {
        self.client.post("/sessions", data, RequestConfig::default()).await?.into_json()
    }

    pub async fn create(&self, data: &CreateSessionData) -> Result<ApiResponse<Session>, ApiError> {
        self.client.post("/sessions", data, RequestConfig::default()).await?.into_json()
    }

    pub async fn get(&self, name: &str) -> Result<ApiResponse<Session>, ApiError> {
        self.client.get(&format!("/sessions/{}", name), RequestConfig::default()).await?.into_json()
    }

    pub async fn start(&self, name: &str) -> Result<ApiResponse<Session>, ApiError> {
        self.action(name, "start").await
    }

    pub async fn stop(&self, name: &str) -> Result<ApiResponse<Session>, ApiError> {
        self.action(name, "stop").await
    }

    pub async fn restart(&self, name: &str) -> Result<ApiResponse<Session>, ApiError> {
        self.action(name, "restart").await
    }

    pub async fn logout(&self, name: &str) -> Result<ApiResponse<Session>, ApiError> {
        self.action(name, "logout").await
    }

    pub async fn delete(&self, name: &str) -> Result<ApiResponse<ResponseBody>, ApiError> {
        self.client.delete(&format!("/sessions/{}", name), RequestConfig::default()).await
    }

    async fn action(&self, name: &str, action: &str) -> Result<ApiResponse<Session>, ApiError> {
        self.client
            .post(&format!("/sessions/{}/{}", name, action), &json!({}), RequestConfig::default())
            .await?
            .into_json()
    }
}

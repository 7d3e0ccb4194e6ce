use std::sync::Arc;
use crate::enums::api_error::ApiError;
use crate::services::http_client::ApiClient;
use crate::structs::http::api_response::ApiResponse;
use crate::structs::http::request_config::RequestConfig;
use crate::structs::session::qr_code::QrCode;

#[derive(Debug, Clone)]
pub struct AuthApi {
    client: Arc<ApiClient>,
}

impl AuthApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn qr_code(&self, name: &str) -> Result<ApiResponse<QrCode>, ApiError> {
        let config = RequestConfig::default().param("format", "image");
        let response = self.client.get(&format!("/{}/auth/qr", name), config).await?;
        let content_type = response.header("content-type").map(str::to_string);

        Ok(response
            .into_bytes()
            .map(|data| QrCode::new(content_type.as_deref(), data)))
    }
}

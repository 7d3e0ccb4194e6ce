use std::sync::Arc;
use crate::enums::api_error::ApiError;
use crate::services::http_client::ApiClient;
use crate::structs::http::api_response::ApiResponse;
use crate::structs::http::request_config::RequestConfig;
use crate::structs::session::profile::Profile;

#[derive(Debug, Clone)]
pub struct ProfileApi {
    client: Arc<ApiClient>,
}

impl ProfileApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn get(&self, name: &str) -> Result<ApiResponse<Profile>, ApiError> {
        self.client.get(&format!("/{}/profile", name), RequestConfig::default()).await?.into_json()
    }
}

use std::collections::HashMap;
use std::time::Duration;
use reqwest::{Client, Method, Response, Url};
use serde::Serialize;
use crate::enums::api_error::ApiError;
use crate::structs::http::api_response::ApiResponse;
use crate::structs::http::request_config::RequestConfig;
use crate::structs::http::response_body::ResponseBody;

/// Thin request helper over `reqwest` with a base URL, default headers and
/// content-type driven body decoding.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    default_headers: HashMap<String, String>,
    client: Client,
    timeout: Option<Duration>,
}

impl ApiClient {
    pub fn new(base_url: &str, headers: HashMap<String, String>) -> Self {
        let mut default_headers = HashMap::new();
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.extend(headers);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            default_headers,
            client: Client::new(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get(&self, url: &str, config: RequestConfig) -> Result<ApiResponse<ResponseBody>, ApiError> {
        self.request::<()>(Method::GET, url, None, config).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, url: &str, data: &B, config: RequestConfig) -> Result<ApiResponse<ResponseBody>, ApiError> {
        self.request(Method::POST, url, Some(data), config).await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, url: &str, data: &B, config: RequestConfig) -> Result<ApiResponse<ResponseBody>, ApiError> {
        self.request(Method::PUT, url, Some(data), config).await
    }

    pub async fn patch<B: Serialize + ?Sized>(&self, url: &str, data: &B, config: RequestConfig) -> Result<ApiResponse<ResponseBody>, ApiError> {
        self.request(Method::PATCH, url, Some(data), config).await
    }

    pub async fn delete(&self, url: &str, config: RequestConfig) -> Result<ApiResponse<ResponseBody>, ApiError> {
        self.request::<()>(Method::DELETE, url, None, config).await
    }

    pub async fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        data: Option<&B>,
        config: RequestConfig,
    ) -> Result<ApiResponse<ResponseBody>, ApiError> {
        let result = self.execute(method.clone(), url, data, config).await;

        if let Err(error) = &result {
            match error {
                ApiError::Aborted { .. } => log::info!("Request to {} aborted.", url),
                ApiError::Status { status, body, .. } => {
                    log::error!("[API Fetch Error] {} {}: status {} {}", method, url, status, body.summary());
                }
                other => log::error!("[API Fetch Error] {} {}: {}", method, url, other),
            }
        }

        result
    }

    async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        data: Option<&B>,
        config: RequestConfig,
    ) -> Result<ApiResponse<ResponseBody>, ApiError> {
        let final_url = self.build_url(url, &config.params)?;
        let mut builder = self.client.request(method.clone(), final_url.clone());

        let mut headers = self.default_headers.clone();
        headers.extend(config.headers);
        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(data) = data {
            if method != Method::GET {
                builder = builder.body(serde_json::to_vec(data)?);
            }
        }

        if let Some(timeout) = config.timeout.or(self.timeout) {
            builder = builder.timeout(timeout);
        }

        let aborted_url = final_url.to_string();
        let send = async move {
            let response = builder.send().await?;
            Self::read_response(response).await
        };

        match config.signal {
            Some(signal) => {
                tokio::select! {
                    biased;
                    _ = signal.aborted() => Err(ApiError::Aborted { url: aborted_url }),
                    result = send => result,
                }
            }
            None => send.await,
        }
    }

    /// Base URL and path are concatenated as-is; `None` params are skipped.
    pub fn build_url(&self, path: &str, params: &[(String, Option<String>)]) -> Result<Url, ApiError> {
        let raw = format!("{}{}", self.base_url, path);
        let mut url = Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", raw, e)))?;

        let present: Vec<(&String, &String)> = params
            .iter()
            .filter_map(|(key, value)| value.as_ref().map(|v| (key, v)))
            .collect();
        if !present.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in present {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    async fn read_response(response: Response) -> Result<ApiResponse<ResponseBody>, ApiError> {
        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(name, value)| value.to_str().ok().map(|v| (name.as_str().to_string(), v.to_string())))
            .collect();
        let content_type = headers.get("content-type").cloned();

        let body = if status.as_u16() == 204 {
            ResponseBody::Empty
        } else {
            let raw = response.bytes().await?.to_vec();
            if status.is_success() {
                ResponseBody::decode(content_type.as_deref(), raw)?
            } else {
                // error payloads are kept even when they lie about their content type
                ResponseBody::decode(content_type.as_deref(), raw.clone())
                    .unwrap_or_else(|_| ResponseBody::Text(String::from_utf8_lossy(&raw).into_owned()))
            }
        };

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                status_text,
                body,
                headers,
            });
        }

        Ok(ApiResponse {
            data: body,
            status: status.as_u16(),
            status_text,
            headers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new("http://localhost:3000/api/", HashMap::new())
    }

    #[test]
    fn joins_base_and_path() {
        let url = client().build_url("/sessions/default", &[]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/sessions/default");
    }

    #[test]
    fn skips_absent_params() {
        let params = vec![
            ("format".to_string(), Some("image".to_string())),
            ("limit".to_string(), None),
        ];
        let url = client().build_url("/default/auth/qr", &params).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/default/auth/qr?format=image");
    }

    #[test]
    fn keeps_inline_query() {
        let params = vec![("page".to_string(), Some("2".to_string()))];
        let url = client().build_url("/sessions?all=true", &params).unwrap();
        assert_eq!(url.query(), Some("all=true&page=2"));
    }

    #[test]
    fn caller_headers_override_defaults() {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "text/plain".to_string());
        headers.insert("X-Api-Key".to_string(), "k".to_string());
        let client = ApiClient::new("http://localhost", headers);

        assert_eq!(client.default_headers.get("Content-Type").map(String::as_str), Some("text/plain"));
        assert_eq!(client.default_headers.get("X-Api-Key").map(String::as_str), Some("k"));
    }
}

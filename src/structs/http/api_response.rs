use std::collections::HashMap;
use serde::de::DeserializeOwned;
use crate::enums::api_error::ApiError;
use crate::structs::http::response_body::ResponseBody;

#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: u16,
    pub status_text: String,
    pub headers: HashMap<String, String>,
}

impl<T> ApiResponse<T> {
    pub fn success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            data: f(self.data),
            status: self.status,
            status_text: self.status_text,
            headers: self.headers,
        }
    }
}

impl ApiResponse<ResponseBody> {
    pub fn into_json<T: DeserializeOwned>(self) -> Result<ApiResponse<T>, ApiError> {
        let data = self.data.json()?;
        Ok(ApiResponse {
            data,
            status: self.status,
            status_text: self.status_text,
            headers: self.headers,
        })
    }

    pub fn into_bytes(self) -> ApiResponse<Vec<u8>> {
        self.map(ResponseBody::bytes)
    }

    pub fn into_text(self) -> ApiResponse<String> {
        self.map(ResponseBody::text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(data: ResponseBody) -> ApiResponse<ResponseBody> {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        ApiResponse {
            data,
            status: 201,
            status_text: "Created".to_string(),
            headers,
        }
    }

    #[test]
    fn header_lookup_ignores_case() {
        let response = response(ResponseBody::Empty);
        assert!(response.success());
        assert_eq!(response.header("Content-Type"), Some("application/json"));
        assert_eq!(response.header("x-missing"), None);
    }

    #[test]
    fn conversions_keep_status_and_headers() {
        let text = response(ResponseBody::Json(json!({ "name": "default" }))).into_text();
        assert_eq!(text.data, r#"{"name":"default"}"#);
        assert_eq!(text.status, 201);
        assert_eq!(text.status_text, "Created");

        let bytes = response(ResponseBody::Text("ok".to_string())).into_bytes();
        assert_eq!(bytes.data, b"ok".to_vec());
        assert_eq!(bytes.header("content-type"), Some("application/json"));
    }
}

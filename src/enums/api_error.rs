use std::collections::HashMap;
use thiserror::Error;
use crate::structs::http::response_body::ResponseBody;

/// Non-2xx responses keep the decoded body, status and headers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed with status {status}: {status_text}")]
    Status {
        status: u16,
        status_text: String,
        body: ResponseBody,
        headers: HashMap<String, String>,
    },

    #[error("Request to {url} aborted")]
    Aborted { url: String },

    #[error("Request to {url} timed out")]
    Timeout { url: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("Unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted { .. })
    }

    pub fn body(&self) -> Option<&ResponseBody> {
        match self {
            Self::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        let url = error.url().map(|u| u.to_string()).unwrap_or_default();
        if error.is_timeout() {
            ApiError::Timeout { url }
        } else if error.is_decode() {
            ApiError::Decode(error.to_string())
        } else {
            ApiError::Network(error.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        ApiError::Decode(error.to_string())
    }
}

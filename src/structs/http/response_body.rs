use serde::de::DeserializeOwned;
use serde_json::Value;
use crate::enums::api_error::ApiError;

/// Response payload decoded according to its `content-type`.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Empty,
    Json(Value),
    Binary(Vec<u8>),
    Text(String),
}

impl ResponseBody {
    /// Pick the decoding from the content type: JSON, `image/*` as raw bytes, text otherwise.
    pub fn decode(content_type: Option<&str>, raw: Vec<u8>) -> Result<Self, ApiError> {
        let content_type = content_type.unwrap_or_default();
        if content_type.contains("application/json") {
            if raw.is_empty() {
                return Ok(Self::Empty);
            }
            Ok(Self::Json(serde_json::from_slice(&raw)?))
        } else if content_type.contains("image/") {
            Ok(Self::Binary(raw))
        } else {
            Ok(Self::Text(String::from_utf8_lossy(&raw).into_owned()))
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Json(value) => value.is_null(),
            Self::Binary(bytes) => bytes.is_empty(),
            Self::Text(text) => text.is_empty(),
        }
    }

    pub fn json<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        match self {
            Self::Json(value) => Ok(serde_json::from_value(value)?),
            Self::Empty => Ok(serde_json::from_value(Value::Null)?),
            Self::Text(text) => Ok(serde_json::from_str(&text)?),
            Self::Binary(_) => Err(ApiError::Decode("expected JSON, received binary data".to_string())),
        }
    }

    pub fn bytes(self) -> Vec<u8> {
        match self {
            Self::Empty => Vec::new(),
            Self::Json(value) => value.to_string().into_bytes(),
            Self::Binary(bytes) => bytes,
            Self::Text(text) => text.into_bytes(),
        }
    }

    pub fn text(self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Json(value) => value.to_string(),
            Self::Binary(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Self::Text(text) => text,
        }
    }

    pub fn summary(&self) -> String {
        match self {
            Self::Empty => "<empty>".to_string(),
            Self::Json(value) => value.to_string(),
            Self::Binary(bytes) => format!("<{} bytes>", bytes.len()),
            Self::Text(text) => text.clone(),
        }
    }
}

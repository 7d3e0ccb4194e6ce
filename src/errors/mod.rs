use std::fmt;
use std::error::Error as StdError;
use serde::{Deserialize, Serialize};
use crate::enums::api_error::ApiError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DashboardError {
    // Configuration errors
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Session errors
    SessionNotFound {
        name: String,
        available: Vec<String>,
    },

    // Parser errors
    ParseError {
        content_type: String,
        line_number: Option<usize>,
        reason: String,
        context: Option<String>,
    },

    // Network/API errors
    NetworkError {
        operation: String,
        url: Option<String>,
        status_code: Option<u16>,
        reason: String,
    },
    RemoteError {
        operation: String,
        status_code: u16,
        reason: String,
    },

    // Validation errors
    ValidationError {
        field: String,
        value: String,
        constraint: String,
        suggestion: Option<String>,
    },

    // Foreground session operations that reported through the store's error slot
    OperationFailed {
        operation: String,
        reason: String,
    },

    // System errors
    SystemError {
        operation: String,
        reason: String,
    },
}

impl DashboardError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn validation_error(field: &str, value: &str, constraint: &str, suggestion: Option<&str>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn operation_failed(operation: &str, reason: &str) -> Self {
        Self::OperationFailed {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn session_not_found(name: &str, available: Vec<String>) -> Self {
        Self::SessionNotFound {
            name: name.to_string(),
            available,
        }
    }

    /// Attach the operation name to an error coming out of the HTTP client.
    pub fn from_api_error(error: ApiError, operation: &str) -> Self {
        match error {
            ApiError::Status { status, status_text, .. } => Self::RemoteError {
                operation: operation.to_string(),
                status_code: status,
                reason: status_text,
            },
            ApiError::Aborted { url } => Self::NetworkError {
                operation: operation.to_string(),
                url: Some(url),
                status_code: None,
                reason: "request aborted".to_string(),
            },
            ApiError::Decode(reason) => Self::ParseError {
                content_type: "response body".to_string(),
                line_number: None,
                reason,
                context: Some(operation.to_string()),
            },
            other => Self::NetworkError {
                operation: operation.to_string(),
                url: None,
                status_code: None,
                reason: other.to_string(),
            },
        }
    }

    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::NetworkError { .. } => true,
            Self::RemoteError { status_code, .. } => *status_code >= 500,
            Self::ValidationError { .. } => true,
            Self::ConfigurationError { .. } => true,
            Self::OperationFailed { .. } => true,
            Self::SessionNotFound { .. } => false,
            Self::SystemError { .. } => false,
            _ => false,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::RemoteError { status_code, .. } if *status_code >= 500 => ErrorSeverity::High,
            Self::RemoteError { .. } => ErrorSeverity::Medium,
            Self::SessionNotFound { .. } => ErrorSeverity::Medium,
            Self::OperationFailed { .. } => ErrorSeverity::Medium,
            Self::ParseError { .. } => ErrorSeverity::Medium,
            Self::NetworkError { .. } => ErrorSeverity::Medium,
            Self::ValidationError { .. } => ErrorSeverity::Low,
            Self::ConfigurationError { .. } => ErrorSeverity::Low,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{}': {}\n💡 Check file permissions and syntax", path, reason)
            }
            Self::SessionNotFound { name, available } => {
                let mut msg = format!("Session '{}' not found", name);
                if !available.is_empty() {
                    msg.push_str(&format!("\n💡 Available sessions: {}", available.join(", ")));
                }
                msg
            }
            Self::ParseError { content_type, line_number, reason, context } => {
                let mut msg = format!("Parse error in {}: {}", content_type, reason);
                if let Some(line) = line_number {
                    msg.push_str(&format!(" (line {})", line));
                }
                if let Some(ctx) = context {
                    msg.push_str(&format!("\nContext: {}", ctx));
                }
                msg
            }
            Self::NetworkError { operation, url, status_code, reason } => {
                let mut msg = format!("Network error during {}: {}", operation, reason);
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {})", url));
                }
                if let Some(code) = status_code {
                    msg.push_str(&format!(" (Status: {})", code));
                }
                msg.push_str("\n💡 Check that the WAHA service is reachable and try again");
                msg
            }
            Self::RemoteError { operation, status_code, reason } => {
                let mut msg = format!("Remote service rejected {} with status {}", operation, status_code);
                if !reason.is_empty() {
                    msg.push_str(&format!(": {}", reason));
                }
                if *status_code == 401 || *status_code == 403 {
                    msg.push_str("\n💡 Check the API key configured for the WAHA service");
                }
                msg
            }
            Self::ValidationError { field, value, constraint, suggestion } => {
                let mut msg = format!("Validation error for field '{}': value '{}' violates constraint '{}'", field, value, constraint);
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::OperationFailed { operation, reason } => {
                format!("Could not {}: {}", operation, reason)
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {}: {}", operation, reason)
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for DashboardError {}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Log technical details and print the user-facing message
    pub fn handle_error(error: &DashboardError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());

        eprintln!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 This error is recoverable - you can retry the operation");
        }
    }
}

impl From<std::io::Error> for DashboardError {
    fn from(error: std::io::Error) -> Self {
        DashboardError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(error: serde_json::Error) -> Self {
        DashboardError::ParseError {
            content_type: "JSON".to_string(),
            line_number: Some(error.line()),
            reason: error.to_string(),
            context: None,
        }
    }
}

impl From<toml::de::Error> for DashboardError {
    fn from(error: toml::de::Error) -> Self {
        DashboardError::ParseError {
            content_type: "TOML".to_string(),
            line_number: None,
            reason: error.message().to_string(),
            context: None,
        }
    }
}

impl From<ApiError> for DashboardError {
    fn from(error: ApiError) -> Self {
        DashboardError::from_api_error(error, "HTTP request")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use crate::structs::http::response_body::ResponseBody;

    #[test]
    fn remote_status_error_keeps_status_code() {
        let api_error = ApiError::Status {
            status: 404,
            status_text: "Not Found".to_string(),
            body: ResponseBody::Empty,
            headers: HashMap::new(),
        };

        let error = DashboardError::from_api_error(api_error, "start session");
        match &error {
            DashboardError::RemoteError { status_code, operation, .. } => {
                assert_eq!(*status_code, 404);
                assert_eq!(operation, "start session");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(!error.is_recoverable());
        assert_eq!(error.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn server_side_failures_are_recoverable() {
        let error = DashboardError::RemoteError {
            operation: "list sessions".to_string(),
            status_code: 502,
            reason: "Bad Gateway".to_string(),
        };
        assert!(error.is_recoverable());
        assert_eq!(error.severity(), ErrorSeverity::High);
    }

    #[test]
    fn missing_session_lists_alternatives() {
        let error = DashboardError::session_not_found("ghost", vec!["default".to_string(), "sales".to_string()]);
        let message = error.user_message();
        assert!(message.contains("Session 'ghost' not found"));
        assert!(message.contains("default, sales"));
    }
}

use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::errors::{DashboardError, DashboardResult};
use crate::structs::session::session_config::SessionConfig;
use crate::structs::session::webhook_config::WebhookConfig;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateSessionData {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<SessionConfig>,
}

impl CreateSessionData {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn with_start(mut self, start: bool) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_webhook(mut self, url: &str, events: &[String]) -> Self {
        let webhook = WebhookConfig {
            url: url.to_string(),
            events: events.to_vec(),
            ..WebhookConfig::default()
        };
        self.config
            .get_or_insert_with(SessionConfig::default)
            .webhooks
            .get_or_insert_with(Vec::new)
            .push(webhook);
        self
    }

    /// Checks an untyped request body: `name` must be a non-empty string.
    pub fn validate_payload(payload: &Value) -> DashboardResult<()> {
        match payload.get("name") {
            Some(Value::String(name)) if !name.is_empty() => Ok(()),
            Some(other) => Err(DashboardError::validation_error(
                "name",
                &other.to_string(),
                "non-empty string",
                Some("Session name is required"),
            )),
            None => Err(DashboardError::validation_error(
                "name",
                "",
                "non-empty string",
                Some("Session name is required"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn name_must_be_non_empty_string() {
        assert!(CreateSessionData::validate_payload(&json!({"name": "default"})).is_ok());
        assert!(CreateSessionData::validate_payload(&json!({"name": ""})).is_err());
        assert!(CreateSessionData::validate_payload(&json!({"name": 42})).is_err());
        assert!(CreateSessionData::validate_payload(&json!({"start": true})).is_err());
        assert!(CreateSessionData::validate_payload(&json!(null)).is_err());
    }

    #[test]
    fn builder_serializes_remote_shape() {
        let data = CreateSessionData::new("sales")
            .with_start(true)
            .with_webhook("https://hooks.example.com/waha", &["message".to_string()]);

        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["name"], "sales");
        assert_eq!(value["start"], true);
        assert_eq!(value["config"]["webhooks"][0]["url"], "https://hooks.example.com/waha");
        assert_eq!(value["config"]["webhooks"][0]["events"], json!(["message"]));
        assert!(value.get("webhook").is_none());
    }

    #[test]
    fn unknown_config_keys_survive() {
        let data: CreateSessionData = serde_json::from_value(json!({
            "name": "x",
            "config": { "noweb": { "store": { "enabled": true, "fullSync": false } }, "client": { "deviceName": "Dashboard" } }
        }))
        .unwrap();

        let config = data.config.as_ref().unwrap();
        assert_eq!(config.noweb.as_ref().unwrap().store.as_ref().unwrap().full_sync, Some(false));
        let round_trip = serde_json::to_value(&data).unwrap();
        assert_eq!(round_trip["config"]["client"]["deviceName"], "Dashboard");
    }
}

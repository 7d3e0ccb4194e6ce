use std::collections::HashMap;
use std::time::Duration;
use crate::structs::http::abort::AbortSignal;

#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    pub headers: HashMap<String, String>,
    pub params: Vec<(String, Option<String>)>,
    pub signal: Option<AbortSignal>,
    pub timeout: Option<Duration>,
}

impl RequestConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }

    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.params.push((key.to_string(), Some(value.to_string())));
        self
    }

    /// `None` values are skipped when the query string is built.
    pub fn optional_param<V: ToString>(mut self, key: &str, value: Option<V>) -> Self {
        self.params.push((key.to_string(), value.map(|v| v.to_string())));
        self
    }

    pub fn signal(mut self, signal: AbortSignal) -> Self {
        self.signal = Some(signal);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyRequestDto {
    pub endpoint: Option<String>,
    pub method: Option<String>,
    pub payload: Option<Value>,
    pub token: Option<String>,
}

impl ProxyRequestDto {
    pub fn new(endpoint: &str, method: &str, payload: Option<Value>, token: &str) -> Self {
        Self {
            endpoint: Some(endpoint.to_string()),
            method: Some(method.to_string()),
            payload,
            token: Some(token.to_string()),
        }
    }
}

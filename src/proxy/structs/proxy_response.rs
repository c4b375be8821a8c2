use serde_json::Value;

/// Upstream response forwarded verbatim: original status code plus parsed body.
#[derive(Debug, Clone)]
pub struct ProxyResponse {
    pub status: u16,
    pub body: Value,
}

impl ProxyResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn error_message(&self) -> Option<String> {
        for key in ["error", "message", "detail"] {
            if let Some(text) = self.body.get(key).and_then(|v| v.as_str()) {
                if !text.is_empty() {
                    return Some(text.to_string());
                }
            }
        }

        None
    }
}

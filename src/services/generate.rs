//! Outbound proxy to a third-party generative-text API.
//!
//! The backend only reshapes the request and the response; prompt semantics
//! belong to the upstream service. Upstream failures surface as 502, never
//! as a success with empty text.

use serde_json::{json, Value};
use tracing::warn;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct GenerateClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl GenerateClient {
    pub fn new(endpoint: String, api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
            api_key,
        }
    }

    /// Forward a prompt upstream and return the generated text.
    pub async fn complete(&self, prompt: &str) -> Result<String, AppError> {
        let mut request = self.http.post(&self.endpoint).json(&request_body(prompt));
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::upstream(format!("generate request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "generate upstream returned an error");
            return Err(AppError::upstream(format!(
                "generate upstream returned {status}"
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AppError::upstream(format!("generate response was not JSON: {e}")))?;

        extract_text(&body)
            .ok_or_else(|| AppError::upstream("generate response had no text field".to_string()))
    }
}

fn request_body(prompt: &str) -> Value {
    json!({ "prompt": prompt })
}

/// Accept either a flat `{"text": ...}` body or the completion-style
/// `{"choices": [{"text": ...}]}` shape.
fn extract_text(body: &Value) -> Option<String> {
    if let Some(text) = body.get("text").and_then(Value::as_str) {
        return Some(text.to_string());
    }
    body.get("choices")?
        .get(0)?
        .get("text")?
        .as_str()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{extract_text, request_body};

    #[test]
    fn request_body_carries_prompt() {
        let body = request_body("write a haiku");
        assert_eq!(body["prompt"], "write a haiku");
    }

    #[test]
    fn extract_text_handles_both_shapes() {
        assert_eq!(
            extract_text(&json!({"text": "hello"})).as_deref(),
            Some("hello")
        );
        assert_eq!(
            extract_text(&json!({"choices": [{"text": "world"}]})).as_deref(),
            Some("world")
        );
        assert_eq!(extract_text(&json!({"choices": []})), None);
        assert_eq!(extract_text(&json!({})), None);
    }
}

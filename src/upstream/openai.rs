// Chat-completions request/response and client
use crate::error::{GatewayError, Result};
use crate::upstream::traits::CompletionSource;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub seed: i64,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatCompletionRequest {
    pub fn single_user_message(model: &str, seed: i64, content: String) -> Self {
        Self {
            model: model.to_string(),
            seed,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content,
            }],
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatCompletion {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub message: ChoiceMessage,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

pub struct OpenAiClient {
    client: Client,
    endpoint: String,
}

impl OpenAiClient {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait::async_trait]
impl CompletionSource for OpenAiClient {
    async fn complete(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletion> {
        debug!(model = %request.model, "Requesting chat completion");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| GatewayError::FetchFailed(format!("error requesting review: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::FetchFailed(format!("error reading review response: {e}")))?;

        if !status.is_success() {
            return Err(GatewayError::FetchFailed(format!(
                "review request failed with status {}: {}",
                status.as_u16(),
                body.trim()
            )));
        }

        serde_json::from_str(&body)
            .map_err(|e| GatewayError::ParseFailed(format!("error parsing review response: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_carries_seed_model_and_single_user_message() {
        let request =
            ChatCompletionRequest::single_user_message("gpt-3.5-turbo", 1, "hello".to_string());
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "gpt-3.5-turbo",
                "seed": 1,
                "messages": [{"role": "user", "content": "hello"}]
            })
        );
    }
}

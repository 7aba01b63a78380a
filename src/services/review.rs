use crate::config::OPENAI_API_KEY_ENV_VAR;
use crate::error::{GatewayError, Result};
use crate::upstream::CompletionSource;
use crate::upstream::openai::ChatCompletionRequest;

use std::sync::Arc;
use tracing::info;

/// Fixed so the same vehicle yields a stable answer.
pub const REVIEW_SEED: i64 = 1;

pub fn build_prompt(locale: &str, vehicle_name: &str) -> String {
    if locale.starts_with("en") {
        return format!("Give a pros and cons list of {vehicle_name}");
    }
    format!("תן רשימה של יתרונות וחסרונות של {vehicle_name}")
}

/// Asks the text-generation API for a pros/cons review of a vehicle.
pub struct ReviewService {
    source: Arc<dyn CompletionSource>,
    api_key: Option<String>,
    model: String,
}

impl ReviewService {
    pub fn new(
        source: Arc<dyn CompletionSource>,
        api_key: Option<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            source,
            api_key,
            model: model.into(),
        }
    }

    pub async fn review(&self, vehicle_name: &str, locale: Option<&str>) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                GatewayError::InvalidInput(format!(
                    "{OPENAI_API_KEY_ENV_VAR} environment variable is not set"
                ))
            })?;

        let locale = locale.unwrap_or_default();
        info!(vehicle = vehicle_name, locale, "Requesting vehicle review");

        let request = ChatCompletionRequest::single_user_message(
            &self.model,
            REVIEW_SEED,
            build_prompt(locale, vehicle_name),
        );
        let completion = self.source.complete(api_key, &request).await?;

        let choice = completion.choices.into_iter().next().ok_or_else(|| {
            GatewayError::FetchFailed("review returned no completion choices".to_string())
        })?;
        choice
            .message
            .content
            .ok_or_else(|| GatewayError::FetchFailed("review completion has no content".to_string()))
    }
}

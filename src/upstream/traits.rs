use crate::error::Result;
use crate::upstream::openai::{ChatCompletion, ChatCompletionRequest};
use crate::upstream::registry::RegistryEnvelope;
use crate::upstream::wheel_size::{TireSpecQuery, WheelSizeResponse};

/// Government registration-data API.
#[async_trait::async_trait]
pub trait VehicleRegistry: Send + Sync {
    async fn search(&self, plate: &str) -> Result<RegistryEnvelope>;
}

/// Tire-specification API, searched by make/model/year.
#[async_trait::async_trait]
pub trait TireSpecSource: Send + Sync {
    async fn search_by_model(&self, query: &TireSpecQuery) -> Result<WheelSizeResponse>;
}

/// Chat-completions text generation API.
#[async_trait::async_trait]
pub trait CompletionSource: Send + Sync {
    async fn complete(&self, api_key: &str, request: &ChatCompletionRequest)
    -> Result<ChatCompletion>;
}

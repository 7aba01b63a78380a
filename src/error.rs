//! Error types shared by the upstream adapters, the orchestrators and the
//! HTTP layer.

use thiserror::Error;

/// Failure categories surfaced to the gateway. Every variant carries the
/// human-readable message that ends up in the `{"error": ...}` body.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Outbound transport failed or the upstream gateway misbehaved.
    #[error("{0}")]
    FetchFailed(String),

    /// Missing or malformed caller data, or missing required configuration.
    #[error("{0}")]
    InvalidInput(String),

    /// Upstream body was not the JSON shape we expect.
    #[error("{0}")]
    ParseFailed(String),

    /// Upstream answered but reported non-success.
    #[error("{0}")]
    UpstreamUnsuccessful(String),

    /// No matching record or no usable data.
    #[error("{0}")]
    NotFound(String),

    /// A field could not be coerced to its expected type.
    #[error("{0}")]
    ConversionFailed(String),

    /// Known route, wrong HTTP method.
    #[error("{0}")]
    MethodNotAllowed(String),

    #[error("{0}")]
    Internal(String),
}

impl GatewayError {
    /// Stable short name of the category, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::FetchFailed(_) => "fetch_failed",
            GatewayError::InvalidInput(_) => "invalid_input",
            GatewayError::ParseFailed(_) => "parse_failed",
            GatewayError::UpstreamUnsuccessful(_) => "upstream_unsuccessful",
            GatewayError::NotFound(_) => "not_found",
            GatewayError::ConversionFailed(_) => "conversion_failed",
            GatewayError::MethodNotAllowed(_) => "method_not_allowed",
            GatewayError::Internal(_) => "internal",
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::FetchFailed(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;

/// Errors raised while loading [`crate::config::AppConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid value for {name}: {value:?}")]
    InvalidEnv { name: &'static str, value: String },
}

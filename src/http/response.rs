use crate::error::GatewayError;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

pub const ERROR_KEY: &str = "error";

/// `{"error": "<message>"}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[must_use]
pub fn error_status(err: &GatewayError) -> StatusCode {
    match err {
        GatewayError::FetchFailed(_) => StatusCode::BAD_GATEWAY,
        GatewayError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        GatewayError::ParseFailed(_) | GatewayError::ConversionFailed(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        GatewayError::NotFound(_) | GatewayError::UpstreamUnsuccessful(_) => StatusCode::NOT_FOUND,
        GatewayError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
        GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = error_status(&self);
        if status.is_server_error() {
            error!(kind = self.kind(), status = status.as_u16(), "{}", self);
        } else {
            warn!(kind = self.kind(), status = status.as_u16(), "{}", self);
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

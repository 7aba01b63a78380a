use crate::error::GatewayError;
use crate::http::AppState;

use axum::extract::{Request, State};
use axum::http::header::USER_AGENT;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::{Instrument, info, warn};

pub fn is_mobile_client(user_agent: &str, marker: &str) -> bool {
    user_agent.contains(marker)
}

/// Rejects every request whose User-Agent lacks the mobile client marker,
/// before routing or any upstream call.
pub(crate) async fn require_mobile_client(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let user_agent = request
        .headers()
        .get(USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if !is_mobile_client(user_agent, &state.mobile_user_agent) {
        warn!(user_agent, "Rejected request from non-mobile client");
        return GatewayError::InvalidInput("request is not from a mobile device".to_string())
            .into_response();
    }

    next.run(request).await
}

pub(crate) async fn trace_request(request: Request, next: Next) -> Response {
    let span = tracing::info_span!(
        "http.request",
        method = %request.method(),
        path = %request.uri().path(),
    );

    async move {
        let response = next.run(request).await;
        info!(status = response.status().as_u16(), "Request completed");
        response
    }
    .instrument(span)
    .await
}

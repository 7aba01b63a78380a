use crate::error::{GatewayError, Result};
use crate::http::AppState;
use crate::model::{NormalizedVehicle, TirePressureResult};

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, Method, Uri, header::ACCEPT_LANGUAGE};
use percent_encoding::percent_decode_str;

/// Decodes a path segment the way a query component is decoded: `+` is a
/// space and every `%` must start a two-digit hex escape.
pub(crate) fn decode_param(raw: &str) -> Result<String> {
    let bytes = raw.as_bytes();
    for (index, _) in raw.match_indices('%') {
        let escape = bytes.get(index + 1..index + 3);
        if !escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
            return Err(GatewayError::InvalidInput(format!(
                "invalid percent encoding in path parameter {raw}"
            )));
        }
    }
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|e| GatewayError::InvalidInput(format!("invalid path parameter {raw}: {e}")))
}

// Routes carry a single trailing parameter, so it is the last raw segment.
fn required_param(uri: &Uri, missing: &str) -> Result<String> {
    let raw = uri
        .path()
        .rsplit_once('/')
        .map(|(_, segment)| segment)
        .unwrap_or_default();
    let value = decode_param(raw)?;
    let value = value.trim();
    if value.is_empty() {
        return Err(GatewayError::InvalidInput(missing.to_string()));
    }
    Ok(value.to_string())
}

pub(crate) async fn vehicle_handler(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Json<NormalizedVehicle>> {
    let plate = required_param(&uri, "license plate was not found in request")?;
    let vehicle = state.vehicles.lookup(&plate).await?;
    Ok(Json(vehicle))
}

pub(crate) async fn tire_pressure_handler(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Json<TirePressureResult>> {
    let plate = required_param(&uri, "license plate was not found in request")?;
    let vehicle = state.vehicles.lookup(&plate).await?;
    let pressure = state.tire_pressure.fetch(&vehicle).await?;
    Ok(Json(pressure))
}

pub(crate) async fn review_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Json<String>> {
    let vehicle_name = required_param(&uri, "vehicle name was not found in request")?;
    let locale = headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());
    let review = state.reviews.review(&vehicle_name, locale).await?;
    Ok(Json(review))
}

pub(crate) async fn not_found_handler(uri: Uri) -> GatewayError {
    GatewayError::NotFound(format!("no route for {}", uri.path()))
}

pub(crate) async fn method_not_allowed(method: Method, uri: Uri) -> GatewayError {
    GatewayError::MethodNotAllowed(format!("{method} is not allowed on {}", uri.path()))
}

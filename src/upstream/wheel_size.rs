// wheel-size.com search/by_model: wire types and client
use crate::error::{GatewayError, Result};
use crate::upstream::traits::TireSpecSource;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TireSpecQuery {
    pub make: String,
    pub model: String,
    pub year: i64,
    pub region: String,
    pub user_key: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WheelSizeResponse {
    #[serde(default)]
    pub data: Vec<WheelSizeVehicle>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WheelSizeVehicle {
    #[serde(default)]
    pub wheels: Vec<WheelSizeWheel>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WheelSizeWheel {
    #[serde(default)]
    pub is_stock: bool,
    #[serde(default)]
    pub front: WheelSizeTire,
    #[serde(default)]
    pub rear: WheelSizeTire,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WheelSizeTire {
    #[serde(default)]
    pub tire_pressure: Option<WheelSizeTirePressure>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WheelSizeTirePressure {
    #[serde(default)]
    pub psi: Option<f64>,
}

impl WheelSizeTire {
    pub fn psi(&self) -> Option<f64> {
        self.tire_pressure.as_ref().and_then(|p| p.psi)
    }
}

pub struct WheelSizeClient {
    client: Client,
    endpoint: String,
}

impl WheelSizeClient {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait::async_trait]
impl TireSpecSource for WheelSizeClient {
    async fn search_by_model(&self, query: &TireSpecQuery) -> Result<WheelSizeResponse> {
        debug!(make = %query.make, model = %query.model, year = query.year, "Querying tire specifications");

        let year = query.year.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&[
                ("make", query.make.as_str()),
                ("model", query.model.as_str()),
                ("year", year.as_str()),
                ("region", query.region.as_str()),
                ("user_key", query.user_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| GatewayError::FetchFailed(format!("error fetching tire pressure: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::ParseFailed(format!("error reading response body: {e}")))?;

        if status != StatusCode::OK {
            return Err(GatewayError::UpstreamUnsuccessful(format!(
                "tire pressure lookup failed with status {}",
                status.as_u16()
            )));
        }

        serde_json::from_str(&body).map_err(|e| {
            GatewayError::ParseFailed(format!("error parsing tire pressure response: {e}"))
        })
    }
}

mod gate;
mod handlers;
mod response;

pub use gate::is_mobile_client;
pub use response::{ERROR_KEY, ErrorBody, error_status};

use crate::config::AppConfig;
use crate::error::{GatewayError, Result};
use crate::services::{ReviewService, TirePressureService, VehicleService};
use crate::upstream::{DataGovRegistry, OpenAiClient, WheelSizeClient};

use axum::Router;
use axum::middleware;
use axum::routing::get;
use reqwest::Client;
use std::sync::Arc;

pub const LICENSE_PLATE_KEY: &str = "licensePlate";
pub const VEHICLE_NAME_KEY: &str = "vehicleName";

#[derive(Clone)]
pub struct AppState {
    pub vehicles: Arc<VehicleService>,
    pub tire_pressure: Arc<TirePressureService>,
    pub reviews: Arc<ReviewService>,
    pub mobile_user_agent: Arc<str>,
}

impl AppState {
    pub fn new(
        vehicles: VehicleService,
        tire_pressure: TirePressureService,
        reviews: ReviewService,
        mobile_user_agent: &str,
    ) -> Self {
        Self {
            vehicles: Arc::new(vehicles),
            tire_pressure: Arc::new(tire_pressure),
            reviews: Arc::new(reviews),
            mobile_user_agent: Arc::from(mobile_user_agent),
        }
    }

    /// Wires the real upstream clients. All of them share one HTTP client.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(concat!("car-plate-gateway/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GatewayError::Internal(format!("failed to build HTTP client: {e}")))?;

        let registry = DataGovRegistry::new(
            client.clone(),
            &config.vehicle_data_endpoint,
            &config.vehicle_data_resource_id,
        );
        let tire_specs = WheelSizeClient::new(client.clone(), &config.wheel_size_endpoint);
        let completions = OpenAiClient::new(client, &config.openai_endpoint);

        Ok(Self::new(
            VehicleService::new(Arc::new(registry)),
            TirePressureService::new(
                Arc::new(tire_specs),
                config.wheel_size_api_key.clone(),
                &config.wheel_size_region,
            ),
            ReviewService::new(
                Arc::new(completions),
                config.openai_api_key.clone(),
                &config.openai_model,
            ),
            &config.mobile_user_agent,
        ))
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            &format!("/vehicle/:{LICENSE_PLATE_KEY}"),
            get(handlers::vehicle_handler).fallback(handlers::method_not_allowed),
        )
        .route(
            &format!("/tire-pressure/:{LICENSE_PLATE_KEY}"),
            get(handlers::tire_pressure_handler).fallback(handlers::method_not_allowed),
        )
        .route(
            &format!("/review/:{VEHICLE_NAME_KEY}"),
            get(handlers::review_handler).fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::not_found_handler)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            gate::require_mobile_client,
        ))
        .layer(middleware::from_fn(gate::trace_request))
        .with_state(state)
}

use crate::error::{GatewayError, Result};
use crate::model::NormalizedVehicle;
use crate::normalizer::normalize;
use crate::upstream::VehicleRegistry;

use std::sync::Arc;
use tracing::{info, warn};

/// Looks up a plate in the registration data and normalizes the first record.
pub struct VehicleService {
    registry: Arc<dyn VehicleRegistry>,
}

impl VehicleService {
    pub fn new(registry: Arc<dyn VehicleRegistry>) -> Self {
        Self { registry }
    }

    pub async fn lookup(&self, plate: &str) -> Result<NormalizedVehicle> {
        info!(plate, "Fetching vehicle details");
        let envelope = self.registry.search(plate).await?;

        if !envelope.success {
            warn!(plate, "Registration data reported failure");
            return Err(GatewayError::UpstreamUnsuccessful(
                "response was not successful".to_string(),
            ));
        }

        // one vehicle per plate; anything after the first record is ignored
        let record = envelope.result.records.into_iter().next().ok_or_else(|| {
            GatewayError::NotFound(format!(
                "no matching vehicle for the license plate entered {plate}"
            ))
        })?;

        normalize(&record)
    }
}

use crate::config::WHEEL_SIZE_API_KEY_ENV_VAR;
use crate::error::{GatewayError, Result};
use crate::manufacturer;
use crate::model::{NormalizedVehicle, TirePressureResult};
use crate::upstream::TireSpecSource;
use crate::upstream::wheel_size::{TireSpecQuery, WheelSizeWheel};

use std::sync::Arc;
use tracing::info;

/// Resolves recommended tire pressures for a normalized vehicle.
pub struct TirePressureService {
    source: Arc<dyn TireSpecSource>,
    api_key: Option<String>,
    region: String,
}

impl TirePressureService {
    pub fn new(
        source: Arc<dyn TireSpecSource>,
        api_key: Option<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            source,
            api_key,
            region: region.into(),
        }
    }

    /// Builds the upstream query, failing before any network call when the
    /// vehicle or the configuration cannot produce one.
    pub fn build_query(&self, vehicle: &NormalizedVehicle) -> Result<TireSpecQuery> {
        let user_key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                GatewayError::InvalidInput(format!(
                    "{WHEEL_SIZE_API_KEY_ENV_VAR} environment variable is not set"
                ))
            })?;

        let model = vehicle.commercial_name.trim();
        if model.is_empty() {
            return Err(GatewayError::InvalidInput(
                "commercial name (model) is empty".to_string(),
            ));
        }

        if vehicle.manufacture_year <= 0 {
            return Err(GatewayError::InvalidInput(format!(
                "invalid manufacture year: {}",
                vehicle.manufacture_year
            )));
        }

        let make = manufacturer::to_english(&vehicle.manufacturer_name).ok_or_else(|| {
            GatewayError::InvalidInput(format!(
                "manufacturer empty or not mapped: {:?}",
                vehicle.manufacturer_name
            ))
        })?;

        Ok(TireSpecQuery {
            make,
            model: model.to_string(),
            year: vehicle.manufacture_year,
            region: self.region.clone(),
            user_key: user_key.to_string(),
        })
    }

    pub async fn fetch(&self, vehicle: &NormalizedVehicle) -> Result<TirePressureResult> {
        let query = self.build_query(vehicle)?;
        info!(make = %query.make, model = %query.model, year = query.year, "Fetching tire pressure");

        let response = self.source.search_by_model(&query).await?;
        let entry = response
            .data
            .first()
            .ok_or_else(|| GatewayError::NotFound("no vehicle data found".to_string()))?;

        let (front_psi, rear_psi) = select_pressures(&entry.wheels);
        if front_psi.is_none() && rear_psi.is_none() {
            return Err(GatewayError::NotFound(
                "no tire pressure values present".to_string(),
            ));
        }

        Ok(TirePressureResult::from_wheel_size(front_psi, rear_psi))
    }
}

/// Front/rear PSI of the stock wheel, or of the first wheel when none is
/// flagged stock. Either side may be missing independently.
pub fn select_pressures(wheels: &[WheelSizeWheel]) -> (Option<f64>, Option<f64>) {
    match wheels.iter().find(|w| w.is_stock).or_else(|| wheels.first()) {
        Some(wheel) => (wheel.front.psi(), wheel.rear.psi()),
        None => (None, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::wheel_size::{
        WheelSizeResponse, WheelSizeTire, WheelSizeTirePressure, WheelSizeVehicle,
    };
    use std::sync::Mutex;

    struct FakeTireSpecs {
        response: Result<WheelSizeResponse>,
        queries: Mutex<Vec<TireSpecQuery>>,
    }

    impl FakeTireSpecs {
        fn returning(response: Result<WheelSizeResponse>) -> Arc<Self> {
            Arc::new(Self {
                response,
                queries: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait::async_trait]
    impl TireSpecSource for FakeTireSpecs {
        async fn search_by_model(&self, query: &TireSpecQuery) -> Result<WheelSizeResponse> {
            self.queries.lock().unwrap().push(query.clone());
            self.response.clone()
        }
    }

    fn tire(psi: Option<f64>) -> WheelSizeTire {
        WheelSizeTire {
            tire_pressure: psi.map(|psi| WheelSizeTirePressure { psi: Some(psi) }),
        }
    }

    fn wheel(is_stock: bool, front: Option<f64>, rear: Option<f64>) -> WheelSizeWheel {
        WheelSizeWheel {
            is_stock,
            front: tire(front),
            rear: tire(rear),
        }
    }

    fn response(wheels: Vec<WheelSizeWheel>) -> WheelSizeResponse {
        WheelSizeResponse {
            data: vec![WheelSizeVehicle { wheels }],
        }
    }

    fn corolla() -> NormalizedVehicle {
        NormalizedVehicle {
            license_number: 12345678,
            manufacturer_country: "Japan".to_string(),
            manufacturer_name: "טויוטה".to_string(),
            commercial_name: " Corolla ".to_string(),
            trim_level: String::new(),
            safety_features_level: 0,
            pollution_level: 0,
            manufacture_year: 2020,
            last_test_date: String::new(),
            valid_date: String::new(),
            ownership: String::new(),
            frame_number: String::new(),
            color: String::new(),
            front_wheel: String::new(),
            rear_wheel: String::new(),
            fuel_type: String::new(),
            first_on_road_date: String::new(),
        }
    }

    fn service(source: Arc<FakeTireSpecs>) -> TirePressureService {
        TirePressureService::new(source, Some("ws-key".to_string()), "usdm")
    }

    #[test]
    fn stock_wheel_is_preferred() {
        let wheels = vec![wheel(false, Some(30.0), Some(30.0)), wheel(true, Some(33.0), Some(35.0))];
        assert_eq!(select_pressures(&wheels), (Some(33.0), Some(35.0)));
    }

    #[test]
    fn first_wheel_is_used_without_stock_flag() {
        let wheels = vec![wheel(false, Some(30.0), None), wheel(false, Some(40.0), Some(40.0))];
        assert_eq!(select_pressures(&wheels), (Some(30.0), None));
        assert_eq!(select_pressures(&[]), (None, None));
    }

    #[tokio::test]
    async fn query_uses_translated_make_and_trimmed_model() {
        let source = FakeTireSpecs::returning(Ok(response(vec![wheel(true, Some(32.0), None)])));
        let result = service(source.clone()).fetch(&corolla()).await.unwrap();

        assert_eq!(result, TirePressureResult::from_wheel_size(Some(32.0), None));
        let queries = source.queries.lock().unwrap();
        assert_eq!(
            queries[0],
            TireSpecQuery {
                make: "toyota".to_string(),
                model: "Corolla".to_string(),
                year: 2020,
                region: "usdm".to_string(),
                user_key: "ws-key".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn rear_only_pressure_is_a_success() {
        let source = FakeTireSpecs::returning(Ok(response(vec![wheel(true, None, Some(36.0))])));
        let result = service(source).fetch(&corolla()).await.unwrap();
        assert_eq!(result.front_psi, None);
        assert_eq!(result.rear_psi, Some(36.0));
    }

    #[tokio::test]
    async fn missing_both_pressures_is_not_found() {
        let source = FakeTireSpecs::returning(Ok(response(vec![wheel(true, None, None)])));
        let err = service(source).fetch(&corolla()).await.unwrap_err();
        assert_eq!(
            err,
            GatewayError::NotFound("no tire pressure values present".to_string())
        );
    }

    #[tokio::test]
    async fn empty_vehicle_data_is_not_found() {
        let source = FakeTireSpecs::returning(Ok(WheelSizeResponse::default()));
        let err = service(source).fetch(&corolla()).await.unwrap_err();
        assert_eq!(err, GatewayError::NotFound("no vehicle data found".to_string()));
    }

    #[tokio::test]
    async fn preconditions_fail_before_any_request() {
        let source = FakeTireSpecs::returning(Ok(response(vec![wheel(true, Some(32.0), None)])));

        let no_key = TirePressureService::new(source.clone(), None, "usdm");
        assert!(matches!(
            no_key.fetch(&corolla()).await,
            Err(GatewayError::InvalidInput(_))
        ));

        let mut no_model = corolla();
        no_model.commercial_name = "   ".to_string();
        assert!(matches!(
            service(source.clone()).fetch(&no_model).await,
            Err(GatewayError::InvalidInput(_))
        ));

        let mut no_year = corolla();
        no_year.manufacture_year = 0;
        assert!(matches!(
            service(source.clone()).fetch(&no_year).await,
            Err(GatewayError::InvalidInput(_))
        ));

        let mut no_make = corolla();
        no_make.manufacturer_name = String::new();
        assert!(matches!(
            service(source.clone()).fetch(&no_make).await,
            Err(GatewayError::InvalidInput(_))
        ));

        assert!(source.queries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn upstream_failures_propagate() {
        let source = FakeTireSpecs::returning(Err(GatewayError::UpstreamUnsuccessful(
            "tire pressure lookup failed with status 401".to_string(),
        )));
        let err = service(source).fetch(&corolla()).await.unwrap_err();
        assert!(matches!(err, GatewayError::UpstreamUnsuccessful(_)));
    }
}

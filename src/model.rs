// Output shapes served by the gateway: NormalizedVehicle, TirePressureResult
use serde::{Deserialize, Serialize};

pub const TIRE_PRESSURE_SOURCE: &str = "wheel-size.com";
pub const TIRE_PRESSURE_UNIT: &str = "psi";

/// Stable projection of one registration record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedVehicle {
    pub license_number: i64,
    pub manufacturer_country: String,
    pub manufacturer_name: String,
    pub commercial_name: String,
    pub trim_level: String,
    pub safety_features_level: i64,
    pub pollution_level: i64,
    pub manufacture_year: i64,
    pub last_test_date: String,
    pub valid_date: String,
    pub ownership: String,
    pub frame_number: String,
    pub color: String,
    pub front_wheel: String,
    pub rear_wheel: String,
    pub fuel_type: String,
    pub first_on_road_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TirePressureResult {
    pub source: String,
    pub front_psi: Option<f64>,
    pub rear_psi: Option<f64>,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl TirePressureResult {
    pub fn from_wheel_size(front_psi: Option<f64>, rear_psi: Option<f64>) -> Self {
        Self {
            source: TIRE_PRESSURE_SOURCE.to_string(),
            front_psi,
            rear_psi,
            unit: TIRE_PRESSURE_UNIT.to_string(),
            note: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_rear_pressure_serializes_as_null() {
        let result = TirePressureResult::from_wheel_size(Some(32.0), None);
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({"source": "wheel-size.com", "frontPsi": 32.0, "rearPsi": null, "unit": "psi"})
        );
    }
}

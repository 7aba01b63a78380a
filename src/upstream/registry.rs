// data.gov.il datastore_search: wire types and client
use crate::error::{GatewayError, Result};
use crate::upstream::traits::VehicleRegistry;

use reqwest::Client;
use serde::{Deserialize, Deserializer};
use tracing::debug;

#[derive(Debug, Clone, Deserialize)]
pub struct RegistryEnvelope {
    pub success: bool,
    #[serde(default)]
    pub result: RegistryResult,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistryResult {
    #[serde(default)]
    pub records: Vec<RawVehicleRecord>,
}

/// `ramat_eivzur_betihuty` arrives as a number on some records and as a
/// string on others.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SafetyFeaturesLevel {
    Integer(i64),
    Float(f64),
    Text(String),
}

/// One registration record as published by the ministry of transport.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawVehicleRecord {
    #[serde(rename = "mispar_rechev", default, deserialize_with = "null_as_default")]
    pub license_number: i64,
    /// Manufacture country and manufacturer name in one field.
    #[serde(rename = "tozeret_nm", default, deserialize_with = "null_as_default")]
    pub manufacture_country: String,
    #[serde(rename = "ramat_gimur", default, deserialize_with = "null_as_default")]
    pub trim_level: String,
    #[serde(rename = "ramat_eivzur_betihuty", default)]
    pub safety_features_level: Option<SafetyFeaturesLevel>,
    #[serde(rename = "kvutzat_zihum", default, deserialize_with = "null_as_default")]
    pub pollution_level: i64,
    #[serde(rename = "shnat_yitzur", default, deserialize_with = "null_as_default")]
    pub manufacture_year: i64,
    #[serde(rename = "mivchan_acharon_dt", default, deserialize_with = "null_as_default")]
    pub last_test_date: String,
    #[serde(rename = "tokef_dt", default, deserialize_with = "null_as_default")]
    pub valid_date: String,
    #[serde(rename = "baalut", default, deserialize_with = "null_as_default")]
    pub ownership: String,
    #[serde(rename = "misgeret", default, deserialize_with = "null_as_default")]
    pub frame_number: String,
    #[serde(rename = "tzeva_rechev", default, deserialize_with = "null_as_default")]
    pub color: String,
    #[serde(rename = "zmig_kidmi", default, deserialize_with = "null_as_default")]
    pub front_wheel: String,
    #[serde(rename = "zmig_ahori", default, deserialize_with = "null_as_default")]
    pub rear_wheel: String,
    #[serde(rename = "sug_delek_nm", default, deserialize_with = "null_as_default")]
    pub fuel_type: String,
    #[serde(rename = "moed_aliya_lakvish", default, deserialize_with = "null_as_default")]
    pub first_on_road_date: String,
    #[serde(rename = "kinuy_mishari", default, deserialize_with = "null_as_default")]
    pub commercial_name: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub struct DataGovRegistry {
    client: Client,
    endpoint: String,
    resource_id: String,
}

impl DataGovRegistry {
    pub fn new(client: Client, endpoint: impl Into<String>, resource_id: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            resource_id: resource_id.into(),
        }
    }
}

#[async_trait::async_trait]
impl VehicleRegistry for DataGovRegistry {
    async fn search(&self, plate: &str) -> Result<RegistryEnvelope> {
        debug!(plate, endpoint = %self.endpoint, "Querying registration data");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("resource_id", self.resource_id.as_str()),
                ("limit", "1"),
                ("q", plate),
            ])
            .send()
            .await
            .map_err(|e| GatewayError::FetchFailed(format!("error fetching license plate: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::ParseFailed(format!("error reading response: {e}")))?;

        serde_json::from_str(&body)
            .map_err(|e| GatewayError::ParseFailed(format!("error converting response: {e}")))
    }
}

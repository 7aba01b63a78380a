use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::time::Duration;

pub const DEFAULT_CONFIG_PATH: &str = "config.json";
pub const CONFIG_PATH_ENV_VAR: &str = "CONFIG_PATH";

pub const PORT_ENV_VAR: &str = "PORT";
pub const OPENAI_API_KEY_ENV_VAR: &str = "OPENAPI_KEY";
pub const WHEEL_SIZE_API_KEY_ENV_VAR: &str = "WHEEL_SIZE_KEY";
pub const VEHICLE_DATA_ENDPOINT_ENV_VAR: &str = "VEHICLE_DATA_ENDPOINT";
pub const WHEEL_SIZE_ENDPOINT_ENV_VAR: &str = "WHEEL_SIZE_ENDPOINT";
pub const OPENAI_ENDPOINT_ENV_VAR: &str = "OPENAI_ENDPOINT";
pub const REQUEST_TIMEOUT_ENV_VAR: &str = "REQUEST_TIMEOUT_SECS";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub port: u16,
    pub openai_api_key: Option<String>,
    pub wheel_size_api_key: Option<String>,
    pub vehicle_data_endpoint: String,
    pub vehicle_data_resource_id: String,
    pub wheel_size_endpoint: String,
    pub wheel_size_region: String,
    pub openai_endpoint: String,
    pub openai_model: String,
    pub mobile_user_agent: String,
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            openai_api_key: None,
            wheel_size_api_key: None,
            vehicle_data_endpoint: "https://data.gov.il/api/3/action/datastore_search".to_string(),
            vehicle_data_resource_id: "053cea08-09bc-40ec-8f7a-156f0677aff3".to_string(),
            wheel_size_endpoint: "https://api.wheel-size.com/v2/search/by_model/".to_string(),
            wheel_size_region: "usdm".to_string(),
            openai_endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            openai_model: "gpt-3.5-turbo".to_string(),
            mobile_user_agent: "Ktor client".to_string(),
            request_timeout_secs: 15,
        }
    }
}

impl AppConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Applies overrides looked up through `lookup` (normally `std::env::var`).
    /// Blank values are ignored so an exported-but-empty key stays unset.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(value) = get(PORT_ENV_VAR) {
            self.port = value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                name: PORT_ENV_VAR,
                value,
            })?;
        }
        if let Some(value) = get(REQUEST_TIMEOUT_ENV_VAR) {
            self.request_timeout_secs =
                value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                    name: REQUEST_TIMEOUT_ENV_VAR,
                    value,
                })?;
        }
        if let Some(value) = get(OPENAI_API_KEY_ENV_VAR) {
            self.openai_api_key = Some(value);
        }
        if let Some(value) = get(WHEEL_SIZE_API_KEY_ENV_VAR) {
            self.wheel_size_api_key = Some(value);
        }
        if let Some(value) = get(VEHICLE_DATA_ENDPOINT_ENV_VAR) {
            self.vehicle_data_endpoint = value;
        }
        if let Some(value) = get(WHEEL_SIZE_ENDPOINT_ENV_VAR) {
            self.wheel_size_endpoint = value;
        }
        if let Some(value) = get(OPENAI_ENDPOINT_ENV_VAR) {
            self.openai_endpoint = value;
        }
        Ok(())
    }
}

/// Reads the JSON config file at `path`. A missing file yields the defaults.
pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(AppConfig::default()),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_string(),
                source,
            });
        }
    };
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_string(),
        source,
    })
}

/// File config (path from `CONFIG_PATH`) with process environment on top.
pub fn load_from_env() -> Result<AppConfig, ConfigError> {
    let path =
        std::env::var(CONFIG_PATH_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let mut config = load_config(&path)?;
    config.apply_overrides(|name| std::env::var(name).ok())?;
    Ok(config)
}

//! HTTP gateway that resolves Israeli license plates to registration records
//! and enriches them with tire-pressure specifications and AI-written reviews.

pub mod config;
pub mod error;
pub mod http;
pub mod manufacturer;
pub mod model;
pub mod normalizer;
pub mod services;
pub mod upstream;

pub use config::{AppConfig, load_config};
pub use error::{GatewayError, Result};
pub use http::{AppState, build_router};

//! Remote API access: client, configuration and error types.

pub mod client;
pub mod config;
pub mod error;

pub use client::{ApiClient, HealthStatus};
pub use config::{ApiConfig, ApiEnvironment, LOCAL_BASE_URL, PRODUCTION_BASE_URL};
pub use error::{ApiError, ConfigError, Fetched};

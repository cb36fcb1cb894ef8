//! AeroStream Core — client for the AeroStream flight API.
//!
//! This crate contains:
//! - An async HTTP client for the `/flights` and `/stats` endpoints whose
//!   public operations never return an error (failures become fallback values)
//! - Injected configuration with named environments and TOML loading
//! - A typed error taxonomy for callers that want the failure detail
//! - A lenient typed view over the opaque flight records

pub mod api;
pub mod flight;

pub use api::{
    ApiClient, ApiConfig, ApiEnvironment, ApiError, ConfigError, Fetched, HealthStatus,
};
pub use flight::{Flight, FlightStatus, FlightSummary};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: the client and everything it hands out can cross
    /// task boundaries.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<ApiClient>();
        require_sync::<ApiClient>();
        require_send::<ApiConfig>();
        require_sync::<ApiConfig>();
        require_send::<ApiError>();
        require_sync::<ApiError>();
        require_send::<Fetched<serde_json::Value>>();
        require_sync::<Fetched<serde_json::Value>>();
        require_send::<FlightSummary>();
        require_sync::<FlightSummary>();
    }

    /// The fallback operations must be usable from a spawned task.
    #[allow(dead_code)]
    fn fetch_futures_are_send(client: &ApiClient) {
        fn require_send<T: Send>(_: &T) {}

        require_send(&client.get_flights());
        require_send(&client.get_stats());
        require_send(&client.fetch_flights());
        require_send(&client.fetch_stats());
    }
}

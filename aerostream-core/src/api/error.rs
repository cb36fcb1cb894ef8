//! Structured error types and the success-or-fallback outcome.
//!
//! `ApiError` never crosses the fallback operations of [`ApiClient`]; it is
//! logged there and replaced by a fallback value. The `try_*` operations hand
//! it to callers that want the detail.
//!
//! [`ApiClient`]: super::ApiClient

use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// A failed request against the AeroStream API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status} from {endpoint} endpoint")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
    },

    #[error("malformed response from {endpoint} endpoint: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised while building an [`ApiConfig`](super::ApiConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid base URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("unknown environment '{0}' (expected 'production' or 'local')")]
    UnknownEnvironment(String),
}

/// Outcome of a fallback operation.
///
/// Both variants carry a well-formed value. `Fallback` means the request
/// failed and the value is the sentinel; the failure has already been logged.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    Live(T),
    Fallback(T),
}

impl<T> Fetched<T> {
    pub fn is_live(&self) -> bool {
        matches!(self, Fetched::Live(_))
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Fetched::Fallback(_))
    }

    pub fn value(&self) -> &T {
        match self {
            Fetched::Live(v) | Fetched::Fallback(v) => v,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Fetched::Live(v) | Fetched::Fallback(v) => v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetched_accessors() {
        let live = Fetched::Live(vec![1, 2]);
        assert!(live.is_live());
        assert!(!live.is_fallback());
        assert_eq!(live.value(), &vec![1, 2]);
        assert_eq!(live.into_inner(), vec![1, 2]);

        let fallback: Fetched<Option<u32>> = Fetched::Fallback(None);
        assert!(fallback.is_fallback());
        assert_eq!(fallback.into_inner(), None);
    }

    #[test]
    fn status_error_names_endpoint() {
        let err = ApiError::Status {
            endpoint: "flights",
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert_eq!(err.to_string(), "HTTP 500 Internal Server Error from flights endpoint");
    }

    #[test]
    fn decode_error_names_endpoint() {
        let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = ApiError::Decode {
            endpoint: "stats",
            source,
        };
        assert!(err.to_string().starts_with("malformed response from stats endpoint"));
    }
}

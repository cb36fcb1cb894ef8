//! Client configuration: which AeroStream deployment to talk to.
//!
//! A config file is a small TOML document with either an explicit URL or a
//! named environment:
//!
//! ```toml
//! base_url = "https://aerostream.onrender.com/api"
//! # or
//! environment = "local"
//! ```

use super::error::ConfigError;
use reqwest::Url;
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Hosted deployment.
pub const PRODUCTION_BASE_URL: &str = "https://aerostream.onrender.com/api";

/// Backend started locally with its default port.
pub const LOCAL_BASE_URL: &str = "http://localhost:8000/api";

/// Named deployments of the AeroStream backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiEnvironment {
    #[default]
    Production,
    Local,
}

impl ApiEnvironment {
    pub fn base_url(self) -> &'static str {
        match self {
            ApiEnvironment::Production => PRODUCTION_BASE_URL,
            ApiEnvironment::Local => LOCAL_BASE_URL,
        }
    }
}

impl FromStr for ApiEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(ApiEnvironment::Production),
            "local" | "dev" => Ok(ApiEnvironment::Local),
            _ => Err(ConfigError::UnknownEnvironment(s.to_string())),
        }
    }
}

impl fmt::Display for ApiEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiEnvironment::Production => f.write_str("production"),
            ApiEnvironment::Local => f.write_str("local"),
        }
    }
}

/// On-disk shape of a config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    base_url: Option<String>,
    environment: Option<String>,
}

/// Where the client sends its requests.
///
/// The base URL is stored without a trailing slash, so endpoint URLs are
/// always `{base_url}/{endpoint}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    origin: Url,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::for_environment(ApiEnvironment::Production)
    }
}

impl ApiConfig {
    pub fn for_environment(env: ApiEnvironment) -> Self {
        Self::with_base_url(env.base_url()).expect("built-in base URLs are valid")
    }

    /// Use an explicit base URL. It must be an absolute http(s) URL.
    pub fn with_base_url(url: impl AsRef<str>) -> Result<Self, ConfigError> {
        let raw = url.as_ref().trim();
        let trimmed = raw.trim_end_matches('/');

        let parsed = Url::parse(trimmed).map_err(|e| ConfigError::InvalidUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                url: raw.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(ConfigError::InvalidUrl {
                url: raw.to_string(),
                reason: "query strings and fragments are not allowed".into(),
            });
        }

        let origin = parsed.join("/").map_err(|e| ConfigError::InvalidUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            base_url: trimmed.to_string(),
            origin,
        })
    }

    /// Parse a TOML config document. `base_url` wins over `environment`;
    /// an empty document yields the default.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(s)?;

        if let Some(url) = file.base_url {
            return Self::with_base_url(url);
        }
        match file.environment {
            Some(env) => Ok(Self::for_environment(env.parse()?)),
            None => Ok(Self::default()),
        }
    }

    /// Read and parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of an endpoint under the base URL, e.g. `endpoint_url("flights")`.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// Root of the host serving the API (`https://host/` for `https://host/api`).
    pub fn origin_url(&self) -> &Url {
        &self.origin
    }
}

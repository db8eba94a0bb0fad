//! Gateway settings.
//!
//! Only the endpoint is configurable. Settings live for the process and are
//! never written to disk.

use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/graphql";

/// Environment variable overriding the endpoint.
pub const ENDPOINT_VAR: &str = "GRAPHQL_URI";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub endpoint: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl Settings {
    /// Read `GRAPHQL_URI`, falling back to the default endpoint.
    pub fn from_env() -> Self {
        Self::from_endpoint(std::env::var(ENDPOINT_VAR).ok())
    }

    /// Blank or missing values fall back to the default.
    pub fn from_endpoint(endpoint: Option<String>) -> Self {
        match endpoint {
            Some(endpoint) if !endpoint.trim().is_empty() => Self {
                endpoint: endpoint.trim().to_string(),
            },
            _ => Self::default(),
        }
    }

    /// Apply a command-line override on top of these settings.
    pub fn with_override(self, endpoint: Option<String>) -> Self {
        match endpoint {
            Some(endpoint) if !endpoint.trim().is_empty() => Self {
                endpoint: endpoint.trim().to_string(),
            },
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_endpoint_uses_default() {
        assert_eq!(Settings::from_endpoint(None).endpoint, DEFAULT_ENDPOINT);
        assert_eq!(
            Settings::from_endpoint(Some("   ".into())).endpoint,
            DEFAULT_ENDPOINT
        );
    }

    #[test]
    fn test_endpoint_is_trimmed() {
        let settings = Settings::from_endpoint(Some(" http://swapi:8080/graphql\n".into()));
        assert_eq!(settings.endpoint, "http://swapi:8080/graphql");
    }

    #[test]
    fn test_override_wins_over_env() {
        let settings = Settings::from_endpoint(Some("http://env/graphql".into()))
            .with_override(Some("http://cli/graphql".into()));
        assert_eq!(settings.endpoint, "http://cli/graphql");

        let settings = Settings::from_endpoint(Some("http://env/graphql".into())).with_override(None);
        assert_eq!(settings.endpoint, "http://env/graphql");
    }
}

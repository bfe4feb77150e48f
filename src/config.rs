use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Listen address (e.g. "127.0.0.1:3000")
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Unix socket path; takes precedence over `listen` when set
    pub socket: Option<String>,

    /// OpenTelemetry configuration
    #[serde(default)]
    pub otel: OtelConfig,
}

fn default_listen() -> String {
    "127.0.0.1:3000".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtelConfig {
    /// OTLP endpoint (if None, uses OTEL_EXPORTER_OTLP_ENDPOINT env var)
    pub endpoint: Option<String>,

    /// Deployment environment name
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_environment() -> String {
    "development".to_string()
}

impl Default for OtelConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            environment: default_environment(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Supports the following env vars:
    /// - STRATUM_SITE_LISTEN
    /// - STRATUM_SITE_SOCKET
    /// - STRATUM_SITE_OTEL_ENDPOINT
    /// - STRATUM_SITE_OTEL_ENVIRONMENT
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Serialized::defaults(ConfigDefaults::default()))
            .merge(Env::prefixed("STRATUM_SITE_").split("_"))
            .extract()
    }
}

/// Helper struct for default values in figment
#[derive(Debug, Serialize)]
struct ConfigDefaults {
    listen: String,
    otel: OtelConfig,
}

impl Default for ConfigDefaults {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            otel: OtelConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::load().unwrap();
        assert_eq!(config.listen, "127.0.0.1:3000");
        assert!(config.socket.is_none());
        assert_eq!(config.otel.environment, "development");
    }
}

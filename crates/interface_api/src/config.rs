//! API configuration

use serde::Deserialize;

use core_kernel::Timezone;
use domain_statements::Branding;

/// API configuration
///
/// Read from `TRUST_`-prefixed environment variables. Nested statement
/// branding uses a double underscore, e.g. `TRUST_BRANDING__COMPANY_NAME`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// Emit logs as JSON lines
    pub json_logs: bool,
    /// Zone used to stamp generated statements
    pub timezone: Timezone,
    /// Load the demonstration data set at startup
    pub seed_demo_data: bool,
    /// Statement header and footer text
    pub branding: Branding,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            json_logs: false,
            timezone: Timezone::default(),
            seed_demo_data: true,
            branding: Branding::default(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::with_prefix("TRUST")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert_eq!(config.timezone.name(), "Australia/Sydney");
        assert!(config.seed_demo_data);
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config: ApiConfig =
            serde_json::from_str(r#"{ "port": 9090, "timezone": "Australia/Perth" }"#).unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.timezone.name(), "Australia/Perth");
        assert_eq!(config.branding, Branding::default());
    }
}

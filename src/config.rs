use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct AppConfig {
    pub server_address: String,
    pub log_level: String,
    pub environment: String,
    pub service_name: String,
    pub service_version: String,
    pub request_timeout_seconds: u64,
    /// Case set served by `GET /api/v1/check`; `None` searches the default
    /// locations and falls back to the builtin cases.
    pub cases_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_address: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            environment: "development".to_string(),
            service_name: "even-adder".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            request_timeout_seconds: 30,
            cases_path: None,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let mut builder = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?)
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(Environment::with_prefix("APP"));

        if let Ok(config_file) = env::var("CONFIG_FILE") {
            builder = builder.add_source(File::with_name(&config_file).required(true));
        }

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Loads a single file layered over the defaults, without consulting the
    /// environment.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?)
            .add_source(File::with_name(path).required(true))
            .build()?
            .try_deserialize()
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

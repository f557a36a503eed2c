use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use kl_shared::config::ConfigError;
use kl_shared::{CorsConfig, DatabaseConfig, Environment, LoggingConfig, ServerConfig};

/// Where team lookups are served from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// MySQL through the connection pool
    #[default]
    Mysql,
    /// In-memory repository seeded from `TEAM_FIXTURE_PATH`
    Memory,
}

impl FromStr for DataSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mysql" => Ok(DataSource::Mysql),
            "memory" | "in-memory" => Ok(DataSource::Memory),
            _ => Err(format!("Invalid data source: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub data_source: DataSource,
    /// JSON array of teams used by the in-memory data source
    pub team_fixture_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();

        let data_source = match env::var("DATA_SOURCE") {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                name: "DATA_SOURCE".to_string(),
                value,
            })?,
            Err(_) => DataSource::default(),
        };

        Ok(Config {
            environment,
            server: ServerConfig::from_env()?,
            cors: CorsConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            logging: LoggingConfig::for_environment(environment),
            data_source,
            team_fixture_path: env::var("TEAM_FIXTURE_PATH").ok().map(PathBuf::from),
        })
    }
}

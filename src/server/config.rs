use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3333";
const DEFAULT_SEED_TABLE_COUNT: i32 = 10;

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,

    /// Insert the default catalog and tables when their tables are empty.
    pub seed_database: bool,
    pub seed_table_count: i32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and every value parsed
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or a value is invalid
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_address = parse_var(
            "BIND_ADDRESS",
            lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
        )?;

        let seed_database = match lookup("SEED_DATABASE") {
            None => false,
            Some(value) => parse_flag("SEED_DATABASE", value)?,
        };

        let seed_table_count = match lookup("SEED_TABLE_COUNT") {
            None => DEFAULT_SEED_TABLE_COUNT,
            Some(value) => parse_var("SEED_TABLE_COUNT", value)?,
        };

        if seed_table_count < 0 {
            return Err(ConfigError::InvalidEnvVar {
                name: "SEED_TABLE_COUNT".to_string(),
                value: seed_table_count.to_string(),
            }
            .into());
        }

        Ok(Self {
            database_url,
            bind_address,
            seed_database,
            seed_table_count,
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, value: String) -> Result<T, ConfigError> {
    match value.trim().parse::<T>() {
        Ok(parsed) => Ok(parsed),
        Err(_) => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
    }
}

fn parse_flag(name: &str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
    }
}

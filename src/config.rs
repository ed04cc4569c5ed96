//! Configuration management for the member registry.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. Every setting has a default, so an empty environment is valid.

use crate::clock::SystemClock;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the member registry.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,

    /// Page size when a listing request does not give one (default: 15)
    pub default_page_size: usize,

    /// Upper bound on any requested page size (default: 100)
    pub max_page_size: usize,

    /// UTC offset, in hours, used to decide what "today" is (default: -3)
    pub utc_offset_hours: i32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `DEFAULT_PAGE_SIZE`: Listing page size (default: 15)
    /// - `MAX_PAGE_SIZE`: Maximum listing page size (default: 100)
    /// - `REGISTRY_UTC_OFFSET_HOURS`: Offset for "today", -12..=14 (default: -3)
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine; dotenvy does not print to stdout
        let _ = dotenvy::dotenv();

        let default_page_size = Self::parse_env_usize("DEFAULT_PAGE_SIZE", 15)?;
        if default_page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "DEFAULT_PAGE_SIZE".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let max_page_size = Self::parse_env_usize("MAX_PAGE_SIZE", 100)?;
        if max_page_size < default_page_size {
            return Err(ConfigError::InvalidValue {
                var: "MAX_PAGE_SIZE".to_string(),
                reason: format!(
                    "Must be at least DEFAULT_PAGE_SIZE ({})",
                    default_page_size
                ),
            });
        }

        let utc_offset_hours = Self::parse_env_i32("REGISTRY_UTC_OFFSET_HOURS", -3)?;
        if !(-12..=14).contains(&utc_offset_hours) {
            return Err(ConfigError::InvalidValue {
                var: "REGISTRY_UTC_OFFSET_HOURS".to_string(),
                reason: "Must be between -12 and 14".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            log_level,
            default_page_size,
            max_page_size,
            utc_offset_hours,
        })
    }

    /// Build the system clock for the configured offset.
    pub fn clock(&self) -> ConfigResult<SystemClock> {
        SystemClock::with_offset_hours(self.utc_offset_hours).ok_or_else(|| {
            ConfigError::InvalidValue {
                var: "REGISTRY_UTC_OFFSET_HOURS".to_string(),
                reason: format!("Offset {} is out of range", self.utc_offset_hours),
            }
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as i32 with a default value.
    fn parse_env_i32(var_name: &str, default: i32) -> ConfigResult<i32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<i32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be an integer, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            default_page_size: 15,
            max_page_size: 100,
            utc_offset_hours: -3,
        }
    }
}

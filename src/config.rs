//! Configuration management for the address book.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is loaded first if present.

use crate::domain::PhoneFormat;
use crate::error::{ConfigError, ConfigResult, PhoneFormatError};
use std::env;
use std::io;

/// Configuration for the address book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Country code prepended to local phone numbers (default: "38")
    pub country_code: String,

    /// Length of a normalized phone number including the `+` (default: 13)
    pub phone_length: usize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_COUNTRY_CODE`: Country code digits (default: 38)
    /// - `ADDRESS_BOOK_PHONE_LENGTH`: Normalized phone length (default: 13)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine, a broken one is not
        Self::check_dotenv(dotenvy::dotenv())?;

        let country_code =
            env::var("ADDRESS_BOOK_COUNTRY_CODE").unwrap_or_else(|_| "38".to_string());
        let phone_length = Self::parse_env_usize("ADDRESS_BOOK_PHONE_LENGTH", 13)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        let config = Config {
            country_code,
            phone_length,
            log_level,
        };

        // Reject a phone format that could never accept a number
        config.phone_format()?;

        Ok(config)
    }

    /// Build the phone format described by this configuration.
    pub fn phone_format(&self) -> ConfigResult<PhoneFormat> {
        PhoneFormat::new(self.country_code.clone(), self.phone_length).map_err(|e| {
            let var = match &e {
                PhoneFormatError::InvalidCountryCode(_) => "ADDRESS_BOOK_COUNTRY_CODE",
                PhoneFormatError::LengthTooShort { .. } => "ADDRESS_BOOK_PHONE_LENGTH",
            };
            ConfigError::InvalidValue {
                var: var.to_string(),
                reason: e.to_string(),
            }
        })
    }

    /// Turn the result of loading a .env file into a config error, ignoring a
    /// file that does not exist.
    fn check_dotenv<T>(result: Result<T, dotenvy::Error>) -> ConfigResult<()> {
        match result {
            Ok(_) => Ok(()),
            Err(dotenvy::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ConfigError::DotenvError(e.to_string())),
        }
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
}

impl Default for Config {
    fn default() -> Self {
        Config {
            country_code: "38".to_string(),
            phone_length: 13,
            log_level: "error".to_string(),
        }
    }
}

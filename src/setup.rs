// src/setup.rs

use std::env;
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

const DEFAULT_BIND_ADDRESS: ([u8; 4], u16) = ([127, 0, 0, 1], 8080);
const DEFAULT_MAX_FORM_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a socket address, got {value:?}")]
    InvalidAddress { name: &'static str, value: String },
    #[error("{name} must be a positive integer, got {value:?}")]
    InvalidSize { name: &'static str, value: String },
    #[error("LOG_FORMAT must be \"pretty\" or \"json\", got {0:?}")]
    InvalidLogFormat(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind_address: SocketAddr,
    pub max_form_bytes: usize,
    pub log_format: LogFormat,
}

impl Settings {
    /// Reads settings from the process environment, after loading `.env` if present
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_address = match lookup("BIND_ADDRESS") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidAddress {
                name: "BIND_ADDRESS",
                value,
            })?,
            None => SocketAddr::from(DEFAULT_BIND_ADDRESS),
        };

        let max_form_bytes = match lookup("MAX_FORM_BYTES") {
            Some(value) => match value.parse::<usize>() {
                Ok(size) if size > 0 => size,
                _ => {
                    return Err(ConfigError::InvalidSize {
                        name: "MAX_FORM_BYTES",
                        value,
                    })
                }
            },
            None => DEFAULT_MAX_FORM_BYTES,
        };

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => return Err(ConfigError::InvalidLogFormat(other.to_string())),
        };

        Ok(Self {
            bind_address,
            max_form_bytes,
            log_format,
        })
    }
}

pub(super) fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

//! Runtime configuration read from environment variables.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `API_KEY` | shared secret every request must present | required |
//! | `CATALOG_BIND_ADDR` | listen address | `0.0.0.0:<PORT>` |
//! | `PORT` | listen port when no bind address is set | `3000` |
//! | `CATALOG_CHANNEL_CAPACITY` | Product actor mailbox size | `32` |
//!
//! The binary loads a `.env` file (via `dotenvy`) before reading these.

use crate::product_actor::DEFAULT_CAPACITY;
use std::fmt;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("{name} is invalid: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub bind_addr: String,
    pub channel_capacity: usize,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("bind_addr", &self.bind_addr)
            .field("channel_capacity", &self.channel_capacity)
            .finish()
    }
}

impl Config {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup("API_KEY").ok_or(ConfigError::Missing("API_KEY"))?;
        if api_key.is_empty() {
            return Err(ConfigError::Empty("API_KEY"));
        }

        let bind_addr = match lookup("CATALOG_BIND_ADDR").filter(|a| !a.is_empty()) {
            Some(addr) => addr,
            None => {
                let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
                format!("0.0.0.0:{port}")
            }
        };

        let channel_capacity = parse_or(
            "CATALOG_CHANNEL_CAPACITY",
            lookup("CATALOG_CHANNEL_CAPACITY"),
            DEFAULT_CAPACITY,
        )?;
        // A zero-sized mailbox cannot be created.
        if channel_capacity == 0 {
            return Err(ConfigError::Invalid {
                name: "CATALOG_CHANNEL_CAPACITY",
                value: "0".into(),
            });
        }

        Ok(Self {
            api_key,
            bind_addr,
            channel_capacity,
        })
    }
}

fn parse_or<N: std::str::FromStr>(
    name: &'static str,
    raw: Option<String>,
    default: N,
) -> Result<N, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

//! Environment configuration for the API binary.
//!
//! | Variable | Default |
//! |---|---|
//! | `CLIENTDESK_BIND_ADDR` | `0.0.0.0:8080` |
//! | `CLIENTDESK_DATA_FILE` | unset (built-in demo data) |
//! | `CLIENTDESK_UTC_OFFSET_MINUTES` | `0` |
//! | `CLIENTDESK_TODAY` | unset (wall clock) |
//! | `CLIENTDESK_LOG_FORMAT` | `json` |

use std::net::SocketAddr;
use std::path::PathBuf;

use chrono::{FixedOffset, NaiveDate, Offset, Utc};
use thiserror::Error;

use clientdesk_observability::LogFormat;

use crate::app::services::Clock;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: {message}")]
    Invalid { var: &'static str, message: String },
}

impl ConfigError {
    fn invalid(var: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            var,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// JSON snapshot to serve instead of the built-in demo data.
    pub data_file: Option<PathBuf>,
    /// Evaluation timezone for "today" and day counts.
    pub utc_offset: FixedOffset,
    /// Pin "today" (demos, tests).
    pub today: Option<NaiveDate>,
    pub log_format: LogFormat,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            data_file: None,
            utc_offset: Utc.fix(),
            today: None,
            log_format: LogFormat::Json,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup (blank values count as unset).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(raw) = get("CLIENTDESK_BIND_ADDR") {
            config.bind_addr = raw
                .trim()
                .parse()
                .map_err(|e| ConfigError::invalid("CLIENTDESK_BIND_ADDR", format!("{e}")))?;
        }

        config.data_file = get("CLIENTDESK_DATA_FILE").map(PathBuf::from);

        if let Some(raw) = get("CLIENTDESK_UTC_OFFSET_MINUTES") {
            let minutes: i32 = raw.trim().parse().map_err(|e| {
                ConfigError::invalid("CLIENTDESK_UTC_OFFSET_MINUTES", format!("{e}"))
            })?;
            config.utc_offset = minutes
                .checked_mul(60)
                .and_then(FixedOffset::east_opt)
                .ok_or_else(|| {
                    ConfigError::invalid("CLIENTDESK_UTC_OFFSET_MINUTES", "offset out of range")
                })?;
        }

        if let Some(raw) = get("CLIENTDESK_TODAY") {
            let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                .map_err(|e| ConfigError::invalid("CLIENTDESK_TODAY", format!("{e}")))?;
            config.today = Some(date);
        }

        if let Some(raw) = get("CLIENTDESK_LOG_FORMAT") {
            config.log_format = raw
                .parse()
                .map_err(|e: String| ConfigError::invalid("CLIENTDESK_LOG_FORMAT", e))?;
        }

        Ok(config)
    }

    pub fn clock(&self) -> Clock {
        match self.today {
            Some(date) => Clock::fixed(date),
            None => Clock::system(self.utc_offset),
        }
    }
}

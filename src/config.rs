//! Service configuration parsed from environment variables.

use crate::pedigree::LayoutConfig;
use crate::pedigree::layout::{DEFAULT_COLUMN_WIDTH, DEFAULT_ROW_GAP};
use crate::pedigree::resolve::DEFAULT_MAX_DEPTH;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
/// Upper bound for `PEDIGREE_MAX_DEPTH`; the layout recursion is as deep as this.
pub const MAX_PEDIGREE_DEPTH: usize = 64;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required env var {0}")]
    Missing(String),
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub layout: LayoutConfig,
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Required:
    /// - `DATABASE_URL`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `DB_MAX_CONNECTIONS`: default 5
    /// - `PEDIGREE_MAX_DEPTH`: generations fetched above a horse, default 10, at most 64
    /// - `PEDIGREE_COLUMN_WIDTH`: horizontal spacing per generation, default 280
    /// - `PEDIGREE_ROW_GAP`: vertical spacing between leaves, default 100
    ///
    /// Spacings must be finite and positive.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is unset or a numeric value does not
    /// parse or is out of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL".into()))?;

        let layout = LayoutConfig {
            column_width: env_parse_checked("PEDIGREE_COLUMN_WIDTH", DEFAULT_COLUMN_WIDTH, is_spacing)?,
            row_gap: env_parse_checked("PEDIGREE_ROW_GAP", DEFAULT_ROW_GAP, is_spacing)?,
            max_depth: env_parse_checked("PEDIGREE_MAX_DEPTH", DEFAULT_MAX_DEPTH, |d| *d <= MAX_PEDIGREE_DEPTH)?,
        };

        Ok(Self {
            database_url,
            port: env_parse("PORT", DEFAULT_PORT)?,
            db_max_connections: env_parse("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?,
            layout,
        })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    env_parse_checked(key, default, |_| true)
}

/// Parse `key` if set, rejecting values that parse but fail `accept`.
fn env_parse_checked<T: std::str::FromStr>(key: &str, default: T, accept: fn(&T) -> bool) -> Result<T, ConfigError> {
    let Ok(raw) = std::env::var(key) else {
        return Ok(default);
    };
    match raw.trim().parse::<T>() {
        Ok(value) if accept(&value) => Ok(value),
        _ => Err(ConfigError::Invalid { key: key.into(), value: raw }),
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_spacing(value: &f64) -> bool {
    value.is_finite() && *value > 0.0
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

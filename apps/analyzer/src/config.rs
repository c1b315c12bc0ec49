use std::str::FromStr;

use anyhow::{Context, Result};

use crate::analysis::keywords::DEFAULT_KEYWORD_COUNT;

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on an upload request body.
    pub max_upload_bytes: usize,
    pub extraction_timeout_secs: u64,
    pub default_keyword_count: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            port: parse_or(&lookup, "PORT", 8080)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            max_upload_bytes: parse_or(&lookup, "MAX_UPLOAD_BYTES", 20 * 1024 * 1024)?,
            extraction_timeout_secs: parse_or(&lookup, "EXTRACTION_TIMEOUT_SECS", 30)?,
            default_keyword_count: parse_or(
                &lookup,
                "DEFAULT_KEYWORD_COUNT",
                DEFAULT_KEYWORD_COUNT,
            )?,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        None => Ok(default),
    }
}

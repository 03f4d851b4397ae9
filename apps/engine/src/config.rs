use anyhow::{Context, Result};

/// Default résumé size cap: 16 MiB.
pub const DEFAULT_MAX_RESUME_BYTES: u64 = 16 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable has a default; nothing is required.
#[derive(Debug, Clone)]
pub struct Config {
    pub rust_log: String,
    /// Résumé files larger than this are rejected before analysis.
    pub max_resume_bytes: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_resume_bytes: match std::env::var("MAX_RESUME_BYTES") {
                Ok(v) => v
                    .parse::<u64>()
                    .context("MAX_RESUME_BYTES must be a byte count")?,
                Err(_) => DEFAULT_MAX_RESUME_BYTES,
            },
        })
    }
}

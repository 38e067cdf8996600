//! # Configuration Management
//!
//! Configuration comes from the environment ("12-factor" style), with a `.env`
//! file picked up for local development.
//!
//! ## Environment Variables
//! - `HOST`: Server bind address (default: 127.0.0.1)
//! - `PORT`: Server port (default: 8080)
//! - `TOKEN_MAX_AGE_SECS`: Lifetime of the `token` login cookie (default: 3600)
//! - `SEED_DEMO_DATA`: Load the demo users and articles at startup (default: true)

use anyhow::{bail, Result};
use std::env;

/// Application configuration
///
/// Loaded once in `main` and used to build [`crate::state::AppState`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host/IP address to bind to
    /// Examples: "127.0.0.1" (localhost only), "0.0.0.0" (all interfaces)
    pub host: String,

    /// Server port number (1-65535)
    pub port: u16,

    /// Max-age of the `token` cookie handed out on login and registration, in seconds
    pub token_max_age_secs: i64,

    /// Whether the stores start with the demo users (`user1`..`user3`) and two articles
    pub seed_demo_data: bool,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Missing variables fall back to their defaults. Values that are present
    /// but malformed (a non-numeric port, an unknown boolean) are errors, so
    /// a typo in `.env` stops the server instead of being silently ignored.
    ///
    /// ## Example .env file
    /// ```text
    /// HOST=127.0.0.1
    /// PORT=8080
    /// TOKEN_MAX_AGE_SECS=3600
    /// SEED_DEMO_DATA=true
    /// ```
    pub fn from_env() -> Result<Self> {
        // dotenvy doesn't error if the file is missing
        dotenvy::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),

            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,

            token_max_age_secs: env::var("TOKEN_MAX_AGE_SECS")
                .unwrap_or_else(|_| "3600".to_string())
                .parse()?,

            seed_demo_data: match env::var("SEED_DEMO_DATA") {
                Ok(raw) => parse_flag(&raw)?,
                Err(_) => true,
            },
        })
    }

    /// Get the socket address to bind the server to, e.g. "127.0.0.1:8080"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            token_max_age_secs: 3600,
            seed_demo_data: true,
        }
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("invalid boolean value '{other}'"),
    }
}

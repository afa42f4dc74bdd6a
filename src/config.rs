//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `PORT` (optional): HTTP server port, defaults to 8080
/// - `GITHUB_WEBHOOK_SECRET` (optional here, required by the signed variant):
///   shared secret used to verify inbound webhook signatures
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    pub github_webhook_secret: Option<String>,
}

/// Default port if the PORT environment variable is not set.
fn default_port() -> u16 {
    8080
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values cannot be parsed into
    /// expected types (e.g. a non-numeric PORT).
    pub fn from_env() -> Result<Self, envy::Error> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Parse environment variables into Config struct
        // Field names are automatically converted: github_webhook_secret -> GITHUB_WEBHOOK_SECRET
        envy::from_env::<Config>()
    }
}

//! Runtime configuration from the environment.

use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to.
    pub bind_address: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    /// Endpoint of the managed data connector; catalog routes are
    /// disabled when unset.
    pub connector_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let gemini_api_key = env::var("GEMINI_API_KEY")
            .context("Missing GEMINI_API_KEY environment variable")?;
        let gemini_model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.0-flash".to_string());
        let bind_address =
            env::var("BIND_ADDRESS").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
        let connector_url = env::var("CONNECTOR_URL").ok();

        Ok(Self {
            bind_address,
            gemini_api_key,
            gemini_model,
            connector_url,
        })
    }
}

//! OAuth client credentials, read from the process environment at startup.

use anyhow::{Context, Result};

/// Google OAuth client credentials.
///
/// Read once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

impl GoogleConfig {
    pub fn from_env() -> Result<Self> {
        Ok(GoogleConfig {
            client_id: std::env::var("GOOGLE_CLIENT_ID")
                .context("GOOGLE_CLIENT_ID is not set")?,
            client_secret: std::env::var("GOOGLE_CLIENT_SECRET")
                .context("GOOGLE_CLIENT_SECRET is not set")?,
            redirect_uri: std::env::var("GOOGLE_REDIRECT_URI")
                .context("GOOGLE_REDIRECT_URI is not set")?,
        })
    }
}

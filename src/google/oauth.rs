//! Google OAuth 2.0 authorization-code flow.
//!
//! Builds the consent-page URL and exchanges an authorization code for token
//! material against Google's token endpoint. Authorization codes are
//! single-use on Google's side; exchanging the same code twice fails there,
//! not here.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::config::GoogleConfig;

/// Google OAuth endpoints.
const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// Read-only access to the user's calendars.
pub const SCOPE: &str = "https://www.googleapis.com/auth/calendar.readonly";

/// Token material returned by a successful code exchange.
///
/// Overwritten wholesale on each exchange. The refresh token is kept but
/// never used; there is no expiry tracking.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenMaterial {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
}

/// OAuth client for Google's authorization-code flow.
#[derive(Debug, Clone)]
pub struct OAuthClient {
    config: GoogleConfig,
    token_url: String,
    http_client: reqwest::Client,
}

impl OAuthClient {
    pub fn new(config: GoogleConfig) -> Self {
        Self {
            config,
            token_url: GOOGLE_TOKEN_URL.to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Overrides the token endpoint (used by tests to point at a mock server).
    pub fn with_token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = url.into();
        self
    }

    /// Builds the Google consent-page URL.
    ///
    /// Pure function of the configuration; cannot fail locally. Requests
    /// offline access so Google includes a refresh token in the exchange.
    pub fn authorization_url(&self) -> String {
        format!(
            "{}?client_id={}&redirect_uri={}&response_type=code&access_type=offline&scope={}",
            GOOGLE_AUTH_URL,
            urlencoding::encode(&self.config.client_id),
            urlencoding::encode(&self.config.redirect_uri),
            urlencoding::encode(SCOPE),
        )
    }

    /// Exchanges an authorization code for token material.
    ///
    /// The code is forwarded unvalidated; Google rejects absent or malformed
    /// codes and that rejection surfaces as the single error path here.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenMaterial> {
        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("code", code),
            ("grant_type", "authorization_code"),
            ("redirect_uri", self.config.redirect_uri.as_str()),
        ];

        let response = self
            .http_client
            .post(&self.token_url)
            .form(&params)
            .send()
            .await
            .context("token exchange request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("token exchange failed ({}): {}", status, body);
        }

        let tokens: TokenMaterial = response
            .json()
            .await
            .context("invalid token response")?;

        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> GoogleConfig {
        GoogleConfig {
            client_id: "test-client.apps.googleusercontent.com".to_string(),
            client_secret: "test-secret".to_string(),
            redirect_uri: "http://localhost:3000/redirect".to_string(),
        }
    }

    #[test]
    fn authorization_url_format() {
        let client = OAuthClient::new(test_config());
        let url = client.authorization_url();

        assert!(url.starts_with(GOOGLE_AUTH_URL));
        assert!(url.contains("client_id=test-client.apps.googleusercontent.com"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("access_type=offline"));
        assert!(url.contains(&urlencoding::encode(SCOPE).into_owned()));
    }

    #[test]
    fn authorization_url_encodes_redirect_uri() {
        let client = OAuthClient::new(test_config());
        let url = client.authorization_url();

        assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Fredirect"));
    }

    #[test]
    fn token_response_without_refresh_token() {
        let json = r#"{"access_token": "ya29.abc", "expires_in": 3599}"#;
        let tokens: TokenMaterial = serde_json::from_str(json).unwrap();

        assert_eq!(tokens.access_token, "ya29.abc");
        assert!(tokens.refresh_token.is_none());
        assert_eq!(tokens.expires_in, Some(3599));
    }
}

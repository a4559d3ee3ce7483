//! Shared application state.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::GoogleConfig;
use crate::google::{CalendarClient, OAuthClient, TokenMaterial};

/// State shared by all request handlers.
///
/// `tokens` is the single process-wide credential slot: empty until the first
/// successful code exchange, then overwritten wholesale by each later one.
/// Concurrent callbacks race and the last writer wins; a calendar call racing
/// a callback may observe either the old or the new token. The lock only
/// satisfies aliasing rules, it makes no ordering promise across requests.
#[derive(Clone)]
pub struct AppState {
    pub oauth: Arc<OAuthClient>,
    pub calendar: Arc<CalendarClient>,
    pub tokens: Arc<RwLock<Option<TokenMaterial>>>,
}

impl AppState {
    pub fn new(config: GoogleConfig) -> Self {
        AppState {
            oauth: Arc::new(OAuthClient::new(config)),
            calendar: Arc::new(CalendarClient::new()),
            tokens: Arc::new(RwLock::new(None)),
        }
    }

    /// Overrides the token endpoint (used by tests).
    pub fn with_token_url(mut self, url: impl Into<String>) -> Self {
        self.oauth = Arc::new(self.oauth.as_ref().clone().with_token_url(url));
        self
    }

    /// Overrides the Calendar API base URL (used by tests).
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.calendar = Arc::new(self.calendar.as_ref().clone().with_base_url(url));
        self
    }

    /// The access token from the current token material, if any exchange has
    /// ever succeeded.
    pub async fn access_token(&self) -> Option<String> {
        self.tokens
            .read()
            .await
            .as_ref()
            .map(|t| t.access_token.clone())
    }
}

//! Thin client for the Google Calendar API v3 list endpoints.
//!
//! Relays the response envelope's `items` array as opaque JSON; no local
//! schema or filtering. When no access token is supplied the request goes out
//! unauthenticated and fails at Google, not locally.

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Base URL for Google Calendar API v3.
const CALENDAR_API_BASE: &str = "https://www.googleapis.com/calendar/v3";

/// Calendar id meaning "the authenticated user's default calendar".
pub const PRIMARY_CALENDAR: &str = "primary";

/// Upper bound on events returned by a single listing call.
const MAX_EVENT_RESULTS: u32 = 15;

/// Response envelope shared by the calendarList and events endpoints.
#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    items: Vec<Value>,
}

/// Google Calendar API client.
#[derive(Debug, Clone)]
pub struct CalendarClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl Default for CalendarClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CalendarClient {
    pub fn new() -> Self {
        Self {
            base_url: CALENDAR_API_BASE.to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Overrides the API base URL (used by tests to point at a mock server).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Lists all calendars visible to the authenticated user.
    pub async fn list_calendars(&self, access_token: Option<&str>) -> Result<Vec<Value>> {
        let url = format!("{}/users/me/calendarList", self.base_url);

        let mut request = self.http_client.get(&url);
        if let Some(token) = access_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .context("calendar list request failed")?;

        let items = Self::unwrap_items(response).await?;
        debug!("fetched {} calendars", items.len());
        Ok(items)
    }

    /// Lists upcoming events from a calendar.
    ///
    /// Fixed parameters: lower time bound is the server clock now, at most
    /// [`MAX_EVENT_RESULTS`] results, recurring events expanded into single
    /// instances, ordered by start time ascending.
    pub async fn list_events(
        &self,
        access_token: Option<&str>,
        calendar_id: &str,
    ) -> Result<Vec<Value>> {
        let url = format!(
            "{}/calendars/{}/events",
            self.base_url,
            urlencoding::encode(calendar_id)
        );

        let mut request = self.http_client.get(&url).query(&[
            ("timeMin", Utc::now().to_rfc3339()),
            ("maxResults", MAX_EVENT_RESULTS.to_string()),
            ("singleEvents", "true".to_string()),
            ("orderBy", "startTime".to_string()),
        ]);
        if let Some(token) = access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.context("events request failed")?;

        let items = Self::unwrap_items(response).await?;
        debug!("fetched {} events from calendar {}", items.len(), calendar_id);
        Ok(items)
    }

    /// Checks the status and unwraps the `items` array from a list response.
    async fn unwrap_items(response: reqwest::Response) -> Result<Vec<Value>> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Google Calendar API error ({}): {}", status, body);
        }

        let envelope: ListResponse = response
            .json()
            .await
            .context("failed to parse list response")?;

        Ok(envelope.items)
    }
}

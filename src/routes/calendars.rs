//! Calendar and event listing endpoints.
//!
//! Both endpoints relay Google's `items` array verbatim. There is no local
//! authentication pre-check: before a successful login the upstream call goes
//! out without a token and Google's rejection becomes the fixed error body.

use axum::{
    Json,
    Router,
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use tracing::error;

use crate::google::PRIMARY_CALENDAR;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/calendars", get(list_calendars))
        .route("/events", get(list_events))
}

/// GET /calendars - List all calendars of the logged-in user
async fn list_calendars(State(state): State<AppState>) -> Response {
    let token = state.access_token().await;

    match state.calendar.list_calendars(token.as_deref()).await {
        Ok(items) => Json(items).into_response(),
        Err(err) => {
            error!("error fetching calendars: {:#}", err);
            "Error!".into_response()
        }
    }
}

#[derive(Deserialize)]
struct EventsQuery {
    calendar: Option<String>,
}

/// GET /events - List upcoming events from a calendar
///
/// Defaults to the primary calendar when no `calendar` parameter is given.
async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<EventsQuery>,
) -> Response {
    let calendar_id = query.calendar.as_deref().unwrap_or(PRIMARY_CALENDAR);
    let token = state.access_token().await;

    match state.calendar.list_events(token.as_deref(), calendar_id).await {
        Ok(items) => Json(items).into_response(),
        Err(err) => {
            error!("can't fetch events: {:#}", err);
            "Error".into_response()
        }
    }
}

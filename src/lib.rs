//! HTTP gateway for Google Calendar.
//!
//! Four routes: `/` redirects to Google's consent page, `/redirect` exchanges
//! the authorization code for tokens, `/calendars` and `/events` proxy the
//! read-only listing calls through the stored access token.

pub mod config;
pub mod google;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

/// Builds the application router.
///
/// Shared between the binary and the integration tests so both exercise the
/// same routing and middleware.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::auth::router())
        .merge(routes::calendars::router())
        .with_state(state)
        .layer(cors)
}

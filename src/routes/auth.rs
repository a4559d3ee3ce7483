//! Login and OAuth callback endpoints.

use axum::{
    Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use tracing::{error, info};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(login))
        .route("/redirect", get(callback))
}

/// GET / - Redirect the browser to Google's consent page
async fn login(State(state): State<AppState>) -> impl IntoResponse {
    let url = state.oauth.authorization_url();
    (StatusCode::FOUND, [(header::LOCATION, url)])
}

#[derive(Deserialize)]
struct CallbackQuery {
    code: Option<String>,
}

/// GET /redirect - Exchange the authorization code for tokens
///
/// Failures answer HTTP 200 with a fixed body; the caller cannot distinguish
/// a rejected code from a transport error.
async fn callback(
    State(state): State<AppState>,
    Query(query): Query<CallbackQuery>,
) -> &'static str {
    // An absent code is forwarded as-is and rejected by Google
    let code = query.code.unwrap_or_default();

    match state.oauth.exchange_code(&code).await {
        Ok(tokens) => {
            *state.tokens.write().await = Some(tokens);
            info!("token exchange succeeded");
            "Successfully logged in"
        }
        Err(err) => {
            error!("couldn't get token: {:#}", err);
            "Error"
        }
    }
}

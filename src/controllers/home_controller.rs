use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use chrono::{SecondsFormat, Utc};

use crate::{envelope::Envelope, render, AppState};

// GET /
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    match render::render_store(&state) {
        Ok(page) => (StatusCode::OK, Html(page)).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, Html(format!("template error: {e}"))).into_response(),
    }
}

// GET /api/health
pub async fn health() -> Json<Envelope<()>> {
    Json(Envelope::status(
        "API is running",
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    ))
}

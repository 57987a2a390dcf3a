//! The /api proxy surface.
//!
//! Stateless forwarders, one per gateway operation. Dashboard operations
//! degrade to an empty shape with status 200 so the UI never blocks on
//! upstream unavailability; chat alone surfaces failure as a 500 with a
//! generic message. No raw error ever reaches the caller.

use axum::Router;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use serde_json::{Value, json};
use tracing::warn;

use crate::gateway::Gateway;

pub const CHAT_ERROR_BODY: &str = "Error contacting bot";

pub fn router(gateway: Gateway) -> Router {
    Router::new()
        .route("/api/chat", post(chat))
        .route("/api/health", get(health))
        .route("/api/practitioner", get(practitioner))
        .route("/api/report", post(report))
        .route("/api/astro", get(astro))
        .with_state(gateway)
}

/// POST /api/chat — forwards the JSON body, returns the upstream reply text
/// verbatim. The one operation whose failure is visible to the user.
async fn chat(State(gateway): State<Gateway>, Json(body): Json<Value>) -> Response {
    match gateway.chat(&body).await {
        Ok(reply) => (StatusCode::OK, reply).into_response(),
        Err(err) => {
            warn!(%err, "chat proxy failed");
            (StatusCode::INTERNAL_SERVER_ERROR, CHAT_ERROR_BODY).into_response()
        }
    }
}

/// GET /api/health — degrades to `{}`.
async fn health(State(gateway): State<Gateway>) -> Json<Value> {
    Json(degrade(gateway.health().await, "health", json!({})))
}

/// GET /api/practitioner — degrades to `[]`.
async fn practitioner(State(gateway): State<Gateway>) -> Json<Value> {
    Json(degrade(gateway.practitioner().await, "practitioner", json!([])))
}

/// POST /api/report — degrades to `{}`.
async fn report(State(gateway): State<Gateway>, Json(body): Json<Value>) -> Json<Value> {
    Json(degrade(gateway.report(&body).await, "report", json!({})))
}

/// GET /api/astro — degrades to `{}`.
async fn astro(State(gateway): State<Gateway>) -> Json<Value> {
    Json(degrade(gateway.astro_summary().await, "astro", json!({})))
}

fn degrade(result: crate::error::Result<Value>, operation: &str, empty: Value) -> Value {
    match result {
        Ok(value) => value,
        Err(err) => {
            warn!(%err, operation, "gateway call degraded to empty shape");
            empty
        }
    }
}

//! Contact API glue
//!
//! The widget posts same-origin `POST /api/contact`; this router forwards the
//! JSON body to the external contact backend named by `CONTACT_API_URL` and
//! relays its status and body unchanged. Request validation, lead scoring,
//! persistence, and notifications all live in that backend, not here.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::json;

/// Contact API state: the upstream backend and a shared HTTP client.
#[derive(Clone)]
pub struct ContactApiState {
    pub upstream_url: Option<String>,
    pub client: reqwest::Client,
}

impl ContactApiState {
    pub fn new(upstream_url: Option<String>) -> Self {
        Self {
            upstream_url,
            client: reqwest::Client::new(),
        }
    }
}

/// Create the contact API router.
pub fn contact_api_router(state: ContactApiState) -> Router {
    Router::new()
        .route("/api/contact", post(contact_handler))
        .with_state(Arc::new(state))
}

async fn contact_handler(
    State(state): State<Arc<ContactApiState>>,
    Json(lead): Json<serde_json::Value>,
) -> Response {
    let Some(upstream) = state.upstream_url.as_deref() else {
        tracing::error!("CONTACT_API_URL is not configured; dropping contact inquiry");
        return upstream_unavailable();
    };

    match state.client.post(upstream).json(&lead).send().await {
        Ok(response) => {
            let status = StatusCode::from_u16(response.status().as_u16())
                .unwrap_or(StatusCode::BAD_GATEWAY);
            let body = response.text().await.unwrap_or_default();
            tracing::info!(status = %status, "relayed contact inquiry");
            (
                status,
                [(header::CONTENT_TYPE, "application/json")],
                body,
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!("failed to reach contact backend: {err}");
            upstream_unavailable()
        }
    }
}

fn upstream_unavailable() -> Response {
    (
        StatusCode::BAD_GATEWAY,
        Json(json!({
            "success": false,
            "message": "We couldn't take your inquiry right now. Please try again shortly.",
        })),
    )
        .into_response()
}

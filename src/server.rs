use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::engine::{classify, normalize, ValidationPolicy};
use crate::facts::FactLookup;

/// Internal failures surfaced as HTTP 500. The engine is total over valid
/// input, so this path should stay unreachable in practice.
struct ServerError(anyhow::Error);

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": true,
            "message": format!("Error processing number: {}", self.0),
        });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

impl<E> From<E> for ServerError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// Shared handler state, constructed once at startup. The fact lookup is
/// injected as a trait object so tests can substitute a fake provider.
#[derive(Clone)]
pub struct AppState {
    pub facts: Arc<dyn FactLookup>,
    pub policy: ValidationPolicy,
}

#[derive(Deserialize)]
struct ClassifyParams {
    number: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/classify-number", get(classify_number))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(state: AppState, addr: &str) -> Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn classify_number(
    State(state): State<AppState>,
    Query(params): Query<ClassifyParams>,
) -> Result<Response, ServerError> {
    let num = match normalize(params.number.as_deref(), state.policy) {
        Ok(num) => num,
        Err(e) => {
            let body = serde_json::json!({ "error": true, "message": e.to_string() });
            return Ok((StatusCode::BAD_REQUEST, Json(body)).into_response());
        }
    };

    let result = classify(&num, state.facts.as_ref()).await;
    Ok((StatusCode::OK, Json(result)).into_response())
}

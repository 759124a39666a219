// HTTP request handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub question: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QueryResponse {
    pub answer: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

/// POST /query
///
/// Same contract as a shell turn: backend failures come back as an
/// `Error: ...` answer with status 200.
pub async fn handle_query(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Response {
    let question = request.question.trim();
    if question.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "question must not be empty");
    }

    let answer = state.service.answer_or_error(question).await;
    Json(QueryResponse { answer }).into_response()
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "backend": state.service.provider_name(),
    }))
}

/// GET /metrics/today
pub async fn metrics_today(State(state): State<AppState>) -> Response {
    let Some(metrics) = state.service.metrics() else {
        return error_response(StatusCode::NOT_FOUND, "request metrics are disabled");
    };

    match metrics.today_summary() {
        Ok(summary) => Json(summary).into_response(),
        Err(e) => {
            tracing::warn!("Failed to summarise metrics: {:#}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", e))
        }
    }
}

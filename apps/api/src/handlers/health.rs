//! Store connectivity probe.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::HealthResponse;
use crate::state::AppState;

/// `GET /health`
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let response = match &state.postgres_pool {
        Some(pool) => match sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(pool).await {
            Ok(_) => HealthResponse {
                status: "ok",
                storage: "postgres",
                detail: None,
            },
            Err(error) => HealthResponse {
                status: "degraded",
                storage: "postgres",
                detail: Some(error.to_string()),
            },
        },
        // The in-memory backend has no external dependency to probe.
        None => HealthResponse {
            status: "ok",
            storage: "memory",
            detail: None,
        },
    };

    let http_status = if response.status == "ok" {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (http_status, Json(response))
}

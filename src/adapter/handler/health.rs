use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapter::handler::AppState;

#[utoipa::path(get, path = "/healthz", responses((status = 200, description = "Process is up")))]
pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

#[utoipa::path(
    get,
    path = "/readyz",
    responses(
        (status = 200, description = "Store reachable"),
        (status = 503, description = "Store unreachable"),
    )
)]
pub async fn readyz(State(state): State<AppState>) -> impl IntoResponse {
    match sqlx::query("SELECT 1").execute(state.db_pool.as_ref()).await {
        Ok(_) => (
            StatusCode::OK,
            Json(serde_json::json!({"status": "ready", "checks": {"database": "ok"}})),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({"status": "not ready", "checks": {"database": "error"}})),
            )
        }
    }
}

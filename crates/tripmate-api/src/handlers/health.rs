//! Health check handlers.

use axum::extract::State;
use axum::Json;

use tripmate_database::connection;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/health
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let database = match connection::health_check(&state.db_pool).await {
        Ok(true) => "up",
        _ => "down",
    };

    Ok(Json(serde_json::json!({
        "status": if database == "up" { "ok" } else { "degraded" },
        "database": database,
    })))
}

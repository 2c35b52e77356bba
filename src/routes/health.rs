use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;
use sqlx::SqlitePool;

#[derive(Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
enum NotReady {
    DatabaseUnavailable,
    SchemaMissing,
}

async fn check_schema(pool: &SqlitePool) -> Result<(), NotReady> {
    let (tables,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'shopping_cart'",
    )
    .fetch_one(pool)
    .await
    .map_err(|e| {
        tracing::error!("Readiness check failed: database unavailable - {e}");
        NotReady::DatabaseUnavailable
    })?;

    if tables == 0 {
        tracing::warn!("Readiness check failed: migrations have not been applied");
        return Err(NotReady::SchemaMissing);
    }

    Ok(())
}

/// GET /health
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "foodgram",
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}

/// GET /ready
///
/// 503 until the database answers and the cart schema is migrated.
pub async fn ready(State(pool): State<SqlitePool>) -> impl IntoResponse {
    match check_schema(&pool).await {
        Ok(()) => (StatusCode::OK, Json(json!({"status": "ready"}))),
        Err(reason) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({"status": "not_ready", "reason": reason.to_string()})),
        ),
    }
}

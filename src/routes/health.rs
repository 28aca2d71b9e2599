use axum::Json;

use crate::error::AppError;

pub async fn health() -> &'static str {
    "ok"
}

pub async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn not_found() -> AppError {
    AppError::NotFound("no such route".to_string())
}

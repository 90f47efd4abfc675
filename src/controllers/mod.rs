use axum::{http::StatusCode, Json};
use serde_json::json;

pub mod auth;
pub mod posts;
pub mod shortlist;

pub(crate) fn internal_error<E: std::fmt::Debug>(err: E) -> (StatusCode, Json<serde_json::Value>) {
    tracing::error!("request failed: {:?}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"status": "error", "message": format!("{:?}", err)})),
    )
}

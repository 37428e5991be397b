//! Service info endpoint

use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

pub const INFO_MESSAGE: &str = "PDF Text Extractor API with RTL Support. \
    Use /extract-text endpoint to upload and process PDFs.";

#[derive(Debug, Serialize, Deserialize)]
pub struct InfoResponse {
    pub message: String,
}

/// GET /
pub async fn info() -> Json<InfoResponse> {
    tracing::info!("Root endpoint accessed");
    Json(InfoResponse {
        message: INFO_MESSAGE.to_string(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(info))
}

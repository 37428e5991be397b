//! PDF Text Extractor Server Library
//!
//! Extracts per-page plain text from uploaded PDFs and flags Arabic
//! (right-to-left) documents. The server binary is in main.rs.
//!
//! # Modules
//!
//! - `document`: Direction detection and the extraction response
//! - `pdf`: Per-page text extraction via MuPDF
//! - `upload`: Filename validation and request-scoped temporary files
//! - `routes`: HTTP endpoints

pub mod config;
pub mod document;
pub mod error;
pub mod pdf;
pub mod routes;
pub mod state;
pub mod upload;

#[cfg(test)]
mod testing;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the application router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let max_upload_bytes = state.config().upload.max_bytes;

    Router::new()
        .merge(routes::root::router())
        .merge(routes::extract::router(max_upload_bytes))
        .nest("/health", routes::health::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

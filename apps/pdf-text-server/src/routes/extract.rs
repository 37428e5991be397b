//! Text extraction endpoint
//!
//! `POST /extract-text` accepts a multipart upload (field `file`), extracts
//! the text of every page and reports whether the document is right-to-left.

use axum::{
    body::Bytes,
    extract::{
        multipart::{MultipartError, MultipartRejection},
        DefaultBodyLimit, Multipart, State,
    },
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::Instrument;
use uuid::Uuid;

use crate::document::ExtractionResult;
use crate::error::{AppError, Result};
use crate::pdf::ExtractedPages;
use crate::state::AppState;
use crate::upload::{is_pdf_filename, ScopedUpload};

/// Multipart field carrying the document
const FILE_FIELD: &str = "file";

/// Create the extract router
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/extract-text", post(extract_text))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}

/// POST /extract-text
async fn extract_text(
    State(state): State<AppState>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<Json<ExtractionResult>> {
    let mut multipart = multipart.map_err(|rejection| {
        tracing::warn!("Rejected multipart request: {}", rejection.body_text());
        AppError::BadRequest(rejection.body_text())
    })?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Failed to read upload", e))?
    {
        let name = field.name().unwrap_or("").to_string();
        let filename = field.file_name().map(|s| s.to_string());

        tracing::debug!("Received field: name='{}', filename={:?}", name, filename);

        if name != FILE_FIELD {
            continue;
        }

        let filename = filename.unwrap_or_default();
        tracing::info!(filename = %filename, "Received file upload");

        if !is_pdf_filename(&filename) {
            tracing::error!(filename = %filename, "Invalid file format");
            return Err(AppError::InvalidFormat);
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error("Failed to read file data", e))?;

        let span = tracing::info_span!("extract", request_id = %Uuid::new_v4(), filename = %filename);
        let result = process_upload(&state, filename, data).instrument(span).await?;

        return Ok(Json(result));
    }

    tracing::warn!("No file field found in multipart upload");
    Err(AppError::BadRequest(format!(
        "No file provided. Use field name '{}'",
        FILE_FIELD
    )))
}

/// Map a multipart stream error, keeping the body-limit status
fn multipart_error(context: &str, e: MultipartError) -> AppError {
    tracing::error!("{}: {}", context, e);
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!("{}: {}", context, e.body_text()))
    } else {
        AppError::BadRequest(format!("{}: {}", context, e.body_text()))
    }
}

/// Persist, extract and classify one upload
async fn process_upload(state: &AppState, filename: String, data: Bytes) -> Result<ExtractionResult> {
    tracing::info!(bytes = data.len(), "Read uploaded file");

    let pages = extract_scoped(state, data).await?;
    let result = ExtractionResult::assemble(filename, pages.into_pages());

    tracing::info!(
        page_count = result.page_count,
        direction = result.text_direction.as_str(),
        language = result.language.map(|l| l.code()),
        "Text extraction completed successfully"
    );

    Ok(result)
}

/// Write the upload to a temporary file, run the extractor on the blocking
/// pool and remove the file whether or not extraction succeeded.
async fn extract_scoped(state: &AppState, data: Bytes) -> Result<ExtractedPages> {
    let dir = state.upload_dir().to_path_buf();
    let extractor = state.extractor();
    let span = tracing::Span::current();

    tokio::task::spawn_blocking(move || -> Result<ExtractedPages> {
        let _entered = span.enter();

        let upload = ScopedUpload::persist(&dir, &data)?;
        let extracted = extractor.extract_pages(upload.path());
        upload.release();

        Ok(extracted?)
    })
    .await
    .map_err(|e| AppError::ExtractionFailure(format!("Task join error: {}", e)))?
}

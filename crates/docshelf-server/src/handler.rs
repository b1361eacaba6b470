use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::Json;
use docshelf_types::{CategoryGroup, DocumentKey};
use tracing::info;

use crate::error::{ServerError, ServerResult};
use crate::server::AppState;

/// Health check handler.
pub async fn health_handler() -> &'static str {
    "OK\n"
}

/// List all registered documents, grouped by category.
pub async fn available_handler(
    State(state): State<AppState>,
) -> ServerResult<Json<Vec<CategoryGroup>>> {
    Ok(Json(state.storage.listing()?))
}

/// Accept a documentation tarball upload.
///
/// The document key is derived from the uploaded filename with the `.tar.gz`
/// suffix stripped. The archive is staged to a scoped temp directory before
/// being handed to storage; the staging is cleaned up on every exit path.
pub async fn upload_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ServerResult<(StatusCode, String)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServerError::Multipart(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let Some(filename) = field.file_name().map(String::from) else {
            return Err(ServerError::Multipart("file field has no filename".into()));
        };
        info!(filename, "attempting to save document tarball");

        let key = DocumentKey::from_filename(&filename)
            .map_err(|e| ServerError::Storage(e.into()))?;
        let data = field
            .bytes()
            .await
            .map_err(|e| ServerError::Multipart(e.to_string()))?;

        let staging = tempfile::tempdir()?;
        let archive_path = staging.path().join(key.archive_filename());
        tokio::fs::write(&archive_path, &data).await?;

        state.storage.put(&key.to_string(), &archive_path).await?;

        return Ok((
            StatusCode::CREATED,
            format!(
                "Document: {} was correctly uploaded, stored, and extracted.\n",
                key.doc_name()
            ),
        ));
    }

    Err(ServerError::MissingUpload)
}

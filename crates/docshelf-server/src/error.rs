use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use docshelf_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("malformed multipart upload: {0}")]
    Multipart(String),

    #[error("request has no 'file' upload field")]
    MissingUpload,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ServerError::Storage(StorageError::InvalidKey(e)) => {
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            ServerError::Storage(StorageError::NotFound { key }) => (
                StatusCode::NOT_FOUND,
                format!("document not found: {key}\n"),
            ),
            ServerError::MissingUpload => (
                StatusCode::BAD_REQUEST,
                "You must upload a tarball file to use the POST endpoint.\n".to_string(),
            ),
            ServerError::Multipart(reason) => {
                (StatusCode::BAD_REQUEST, format!("malformed upload: {reason}\n"))
            }
            // Internal detail is logged, never sent to the client.
            _ => {
                tracing::error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something failed with uploading, storing, or extracting your document tarball.\n"
                        .to_string(),
                )
            }
        };
        (status, body).into_response()
    }
}

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use shelf_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Every variant renders as a plain-text body. Server-side failures are
/// logged here and reported to the client with a fixed message only.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `shelf_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Any failure reading or writing bookmarks.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Dropping the bookmarks table failed.
    #[error("Error deleting the table: {0}")]
    DropTable(#[source] sqlx::Error),

    /// Creating the upload directory or writing the file failed.
    #[error("Upload error: {0}")]
    Upload(#[from] std::io::Error),

    /// Malformed request body.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Request body exceeded the configured upload limit.
    #[error("Payload too large")]
    PayloadTooLarge,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(CoreError::Validation(msg)) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Core(CoreError::Internal(msg)) => {
                tracing::error!(error = %msg, "Internal core error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }
            AppError::DropTable(err) => {
                tracing::error!(error = %err, "Failed to drop bookmarks table");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error deleting the table".to_string(),
                )
            }
            AppError::Upload(err) => {
                tracing::error!(error = %err, "Failed to store upload");
                (StatusCode::INTERNAL_SERVER_ERROR, "Upload error".to_string())
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::PayloadTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "Payload too large".to_string(),
            ),
        };

        (status, message).into_response()
    }
}

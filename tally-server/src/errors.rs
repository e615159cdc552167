use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::warn;

pub use tally_core::errors::ApiError;

pub type ServerResult<T> = Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("{0}")]
    ApiError(#[from] ApiError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// True when the error is the store rejecting a row that would break a
/// UNIQUE constraint. The constraint is the authoritative uniqueness guard;
/// the handler's pre-check only exists for a friendlier error message.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        #[derive(serde::Serialize)]
        struct ErrorResponse {
            message: String,
        }

        let (status, message) = match self {
            ServerError::ApiError(e) => {
                warn!("{}", e);
                match e {
                    ApiError::InternalServerError(message) => {
                        (StatusCode::INTERNAL_SERVER_ERROR, message)
                    }
                    ApiError::BadRequest(message, _) => (StatusCode::BAD_REQUEST, message),
                }
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "Unexpected Error".to_string()),
        };

        (status, axum::Json(ErrorResponse { message })).into_response()
    }
}

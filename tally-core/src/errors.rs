use thiserror::Error;

/// Request-facing error taxonomy shared by the API handlers.
///
/// The second field of `BadRequest` is server-side context (logged, never
/// returned to the client).
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Status=500, InternalServerError: {0}")]
    InternalServerError(String),

    #[error("Status=400, BadRequest: {0}. {1}")]
    BadRequest(String, String),
}

impl ApiError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalServerError(message.into())
    }

    pub fn bad_request(message: impl Into<String>, meta: Option<String>) -> Self {
        Self::BadRequest(message.into(), meta.unwrap_or_default())
    }
}

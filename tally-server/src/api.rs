use crate::errors::{is_unique_violation, ApiError, ServerError};
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;
use tally_core::{NewUser, User};

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewUser>,
) -> Result<Json<User>, ServerError> {
    // Check if the email is already registered. Advisory only: the UNIQUE
    // constraint on users.email remains the authoritative guard below.
    let existing = state
        .db
        .find_user_by_email(&req.email)
        .await
        .map_err(|e| {
            tracing::error!(%e, "Failed to look up user by email");
            ApiError::internal("Database error")
        })?;

    if existing.is_some() {
        return Err(ApiError::bad_request(
            "Email already registered",
            Some(format!("email: {}", req.email)),
        ))?;
    }

    let user = match state.db.create_user(&req).await {
        Ok(user) => user,
        // Lost a race against a concurrent create with the same email
        Err(e) if is_unique_violation(&e) => {
            return Err(ApiError::bad_request(
                "Email already registered",
                Some(format!("email: {}", req.email)),
            ))?;
        }
        Err(e) => {
            tracing::error!(%e, "Failed to create user");
            return Err(ApiError::internal("Database error"))?;
        }
    };

    Ok(Json(user))
}

pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<User>>, ServerError> {
    let users = state.db.list_users().await.map_err(|e| {
        tracing::error!(%e, "Failed to list users");
        ApiError::internal("Database error")
    })?;

    Ok(Json(users))
}

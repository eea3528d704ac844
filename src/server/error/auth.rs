use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer` header.
    #[error("Missing bearer token")]
    MissingToken,

    /// Bearer token is unknown or expired.
    #[error("Invalid or expired bearer token")]
    InvalidToken,

    /// Login attempt with an unknown email, a password-less account or a wrong password.
    ///
    /// One variant for all three so responses never reveal which accounts exist.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Authenticated user lacks a required permission.
    ///
    /// # Fields
    /// - ID of the user that was denied
    /// - Server-side description of the denied action
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `InvalidCredentials` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
///
/// Denials are logged at debug level with the user ID while the client only
/// receives a generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("You are not authorized. Please log in.")),
            )
                .into_response(),
            Self::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Your session has expired. Please log in again.")),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new(self.to_string())),
            )
                .into_response(),
            Self::AccessDenied(user_id, reason) => {
                tracing::debug!("Access denied for user {}: {}", user_id, reason);

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto::new(
                        "Access denied. You do not have the required role.",
                    )),
                )
                    .into_response()
            }
        }
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, ResponseCode},
    server::model::user::RoleCode,
};

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user ID in the session.
    ///
    /// The request requires a logged in user but the session carries no user ID.
    /// Results in a 401 Unauthorized response.
    #[error("User not found in session")]
    UserNotInSession,

    /// Session references a user that no longer exists.
    ///
    /// Results in a 404 Not Found response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// User lacks a role required by the endpoint.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {0} lacks required role {1}")]
    MissingRole(i32, RoleCode),

    /// The `x-api-key` header does not match a configured key.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Request made with an unknown API key")]
    InvalidApiKey,
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error messages:
/// - `UserNotInSession` → 401 Unauthorized with "Authentication required"
/// - `UserNotInDatabase` → 404 Not Found with "User not found"
/// - `MissingRole` / `InvalidApiKey` → 403 Forbidden with "Permission denied"
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, code, message) = match self {
            Self::UserNotInSession => (
                StatusCode::UNAUTHORIZED,
                ResponseCode::InvalidAccessToken,
                "Authentication required",
            ),
            Self::UserNotInDatabase(_) => {
                (StatusCode::NOT_FOUND, ResponseCode::Failure, "User not found")
            }
            Self::MissingRole(_, _) | Self::InvalidApiKey => (
                StatusCode::FORBIDDEN,
                ResponseCode::Failure,
                "Permission denied",
            ),
        };

        (
            status,
            Json(ErrorDto {
                code,
                status: status.as_u16(),
                message: message.to_string(),
            }),
        )
            .into_response()
    }
}

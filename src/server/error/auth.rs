use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the callback URL does not match the token stored in the
    /// session. Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// No member is logged in on this session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No slack id in session")]
    UserNotInSession,

    /// The session names a member that no longer exists.
    ///
    /// Results in a 404 Not Found response.
    #[error("Member with slack id {0} not found in database")]
    UserNotInDatabase(String),

    /// The member lacks a required permission.
    ///
    /// Results in a 403 Forbidden response. The reason is logged, not returned.
    #[error("Member {0} denied access: {1}")]
    AccessDenied(String, String),

    /// The member is banned from the event.
    ///
    /// Results in a 403 Forbidden response carrying the ban reason.
    #[error("Member is banned")]
    Banned(Option<String>),

    /// The submitted event or invite code does not match the configured code.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid {0} code")]
    InvalidCode(&'static str),

    /// Exchanging the authorization code for a token failed.
    ///
    /// Results in a 500 Internal Server Error response.
    #[error("OAuth token exchange failed: {0}")]
    TokenExchange(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `CsrfValidationFailed` → 400 Bad Request
/// - `UserNotInSession` / `InvalidCode` → 401 Unauthorized
/// - `AccessDenied` / `Banned` → 403 Forbidden
/// - `UserNotInDatabase` → 404 Not Found
/// - `TokenExchange` → 500 Internal Server Error
///
/// Denials are logged at debug level; client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.".to_string(),
            ),
            Self::UserNotInSession => (StatusCode::UNAUTHORIZED, "Not authenticated".to_string()),
            Self::UserNotInDatabase(_) => (StatusCode::NOT_FOUND, "User not found".to_string()),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Access denied".to_string()),
            Self::Banned(reason) => (StatusCode::FORBIDDEN, ban_message(reason.as_deref())),
            Self::InvalidCode(kind) => (StatusCode::UNAUTHORIZED, format!("Invalid {} code", kind)),
            Self::TokenExchange(_) => {
                tracing::error!("{}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        if status != StatusCode::INTERNAL_SERVER_ERROR {
            tracing::debug!("{}", self);
        }

        (status, Json(ErrorDto { error: message })).into_response()
    }
}

/// Message shown to a banned member, with the reason when one was recorded.
pub fn ban_message(reason: Option<&str>) -> String {
    match reason {
        Some(reason) if !reason.trim().is_empty() => {
            format!("You have been banned from this event for {}", reason)
        }
        _ => "You have been banned from this event.".to_string(),
    }
}

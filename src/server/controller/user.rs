use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, member::MeResponseDto},
    server::{
        data::member::MemberRepository, error::AppError, middleware::session::AuthSession,
        service::member::MemberService, state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get the logged-in member's profile.
///
/// Anonymous sessions get `{authenticated: false}` with a 200 rather than an error, so the
/// frontend can probe login state.
///
/// # Returns
/// - `200 OK` - Profile with team name, purchases and ticket strings
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/user/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Login state and profile", body = MeResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let member = match AuthSession::new(&session).get_slack_id().await? {
        Some(slack_id) => {
            MemberRepository::new(&state.db)
                .find_by_slack_id(&slack_id)
                .await?
        }
        None => None,
    };

    let response = match member {
        Some(member) => MeResponseDto {
            authenticated: true,
            user: Some(MemberService::new(&state.db).current_user(member).await?),
        },
        None => MeResponseDto {
            authenticated: false,
            user: None,
        },
    };

    Ok((StatusCode::OK, Json(response)))
}

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, member::IntercomTokenDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::intercom::IntercomService,
        state::AppState,
    },
};

/// Tag for grouping support chat endpoints in OpenAPI documentation
pub static INTERCOM_TAG: &str = "intercom";

/// Mint a signed identity token for the support chat widget.
///
/// # Returns
/// - `200 OK` - HS256 token valid for one hour plus the member's XP and team
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Member not found
/// - `500 Internal Server Error` - No signing secret configured
#[utoipa::path(
    get,
    path = "/api/intercom/token",
    tag = INTERCOM_TAG,
    responses(
        (status = 200, description = "Signed token", body = IntercomTokenDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_token(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &state.settings_cache, &session)
        .require(&[])
        .await?;

    let token = IntercomService::new(state.intercom_secret.as_deref()).token_for(&member)?;

    Ok((StatusCode::OK, Json(token)))
}

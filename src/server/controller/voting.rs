use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        vote::{CastVoteDto, VotingPairDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::voting::VotingService,
        state::AppState,
    },
};

/// Tag for grouping voting endpoints in OpenAPI documentation
pub static VOTING_TAG: &str = "voting";

/// Get two random approved projects to compare.
///
/// # Returns
/// - `200 OK` - Two distinct approved projects
/// - `400 Bad Request` - Fewer than two approved projects exist
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/api/voting",
    tag = VOTING_TAG,
    responses(
        (status = 200, description = "Project pair", body = VotingPairDto),
        (status = 400, description = "Not enough projects", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pair(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.settings_cache, &session)
        .require(&[])
        .await?;

    let pair = VotingService::new(&state.db).pair().await?;

    Ok((StatusCode::OK, Json(pair)))
}

/// Record a vote between the projects shown.
///
/// # Returns
/// - `200 OK` - Vote recorded
/// - `400 Bad Request` - Missing fields or the chosen project was not shown
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/api/voting",
    tag = VOTING_TAG,
    request_body = CastVoteDto,
    responses(
        (status = 200, description = "Vote recorded", body = SuccessDto),
        (status = 400, description = "Invalid vote", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cast_vote(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CastVoteDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &state.settings_cache, &session)
        .require(&[])
        .await?;

    VotingService::new(&state.db)
        .cast(&member.slack_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto::new("Vote recorded"))))
}

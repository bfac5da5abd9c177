use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::collections::HashMap;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        team::{CreateTeamDto, TeamIdDto, TeamListDto, TeamResponseDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::team::TeamService,
        state::AppState,
    },
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "team";

/// Get every team with member XP.
#[utoipa::path(
    get,
    path = "/api/teams",
    tag = TEAM_TAG,
    responses(
        (status = 200, description = "All teams", body = TeamListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teams(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let teams = TeamService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(TeamListDto { teams })))
}

/// Create a team with the caller as its founder.
///
/// # Returns
/// - `201 Created` - The new team
/// - `400 Bad Request` - Missing or invalid name/type, or the caller is already on a team
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/api/teams/create",
    tag = TEAM_TAG,
    request_body = CreateTeamDto,
    responses(
        (status = 201, description = "Team created", body = TeamResponseDto),
        (status = 400, description = "Invalid team data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_team(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &state.settings_cache, &session)
        .require(&[])
        .await?;

    let team = TeamService::new(&state.db).create(&member, payload).await?;
    let xp = HashMap::from([(member.slack_id.clone(), member.experience_points)]);

    Ok((
        StatusCode::CREATED,
        Json(TeamResponseDto {
            success: true,
            message: "Team created successfully".to_string(),
            team: Some(team.into_dto(&xp)),
        }),
    ))
}

/// Join a public or invite-only team directly.
///
/// # Returns
/// - `200 OK` - Joined
/// - `400 Bad Request` - Missing team id or already on a team
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - The team is private
/// - `404 Not Found` - Team not found
#[utoipa::path(
    post,
    path = "/api/teams/join",
    tag = TEAM_TAG,
    request_body = TeamIdDto,
    responses(
        (status = 200, description = "Joined team", body = SuccessDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Team is private", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto)
    ),
)]
pub async fn join_team(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<TeamIdDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &state.settings_cache, &session)
        .require(&[])
        .await?;

    TeamService::new(&state.db)
        .join(&member, payload.team_id)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto::new("Successfully joined team"))))
}

/// Ask to join an invite-only team.
#[utoipa::path(
    post,
    path = "/api/teams/request",
    tag = TEAM_TAG,
    request_body = TeamIdDto,
    responses(
        (status = 200, description = "Request recorded", body = SuccessDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto)
    ),
)]
pub async fn request_to_join(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<TeamIdDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &state.settings_cache, &session)
        .require(&[])
        .await?;

    TeamService::new(&state.db)
        .request(&member, payload.team_id)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto::new("Join request sent"))))
}

/// Leave the caller's team. The team is deleted when its last member leaves.
#[utoipa::path(
    post,
    path = "/api/teams/leave",
    tag = TEAM_TAG,
    responses(
        (status = 200, description = "Left team", body = SuccessDto),
        (status = 400, description = "Not on a team", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn leave_team(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &state.settings_cache, &session)
        .require(&[])
        .await?;

    TeamService::new(&state.db).leave(&member).await?;

    Ok((StatusCode::OK, Json(SuccessDto::new("Successfully left team"))))
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        project::{
            CreateDevlogDto, CreateProjectDto, HackatimeRequestDto, ProjectDto, UpdateProjectDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        service::{hackatime::HackatimeService, project::ProjectService},
        state::AppState,
    },
};

/// Tag for grouping project endpoints in OpenAPI documentation
pub static PROJECT_TAG: &str = "project";

/// Get every project with team and member names.
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = PROJECT_TAG,
    responses(
        (status = 200, description = "All projects", body = Vec<ProjectDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_projects(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let projects = ProjectService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(projects)))
}

/// Create a project for the caller's team.
///
/// # Access Control
/// - Logged-in member on a team
///
/// # Returns
/// - `201 Created` - The new project
/// - `400 Bad Request` - Missing name, no team, or a duplicate name within the team
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/api/projects/create",
    tag = PROJECT_TAG,
    request_body = CreateProjectDto,
    responses(
        (status = 201, description = "Project created", body = ProjectDto),
        (status = 400, description = "Invalid project data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_project(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateProjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &state.settings_cache, &session)
        .require(&[])
        .await?;

    let project = ProjectService::new(&state.db).create(&member, payload).await?;

    Ok((StatusCode::CREATED, Json(project)))
}

/// Get one of the caller's team projects.
///
/// # Returns
/// - `200 OK` - The project
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - The project belongs to another team
/// - `404 Not Found` - Project not found
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = PROJECT_TAG,
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "The project", body = ProjectDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not on the owning team", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto)
    ),
)]
pub async fn get_project(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &state.settings_cache, &session)
        .require(&[])
        .await?;

    let project = ProjectService::new(&state.db).get(&member, id).await?;

    Ok((StatusCode::OK, Json(project)))
}

/// Update a project's description and git repository.
#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    tag = PROJECT_TAG,
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    request_body = UpdateProjectDto,
    responses(
        (status = 200, description = "Updated project", body = ProjectDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not on the owning team", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto)
    ),
)]
pub async fn update_project(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &state.settings_cache, &session)
        .require(&[])
        .await?;

    let project = ProjectService::new(&state.db)
        .update(&member, id, payload)
        .await?;

    Ok((StatusCode::OK, Json(project)))
}

/// Post a devlog to a project.
#[utoipa::path(
    post,
    path = "/api/projects/{id}/devlogs",
    tag = PROJECT_TAG,
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    request_body = CreateDevlogDto,
    responses(
        (status = 201, description = "Project with the new devlog", body = ProjectDto),
        (status = 400, description = "Missing content", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not on the owning team", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto)
    ),
)]
pub async fn add_devlog(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<CreateDevlogDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &state.settings_cache, &session)
        .require(&[])
        .await?;

    let project = ProjectService::new(&state.db)
        .add_devlog(&member, id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(project)))
}

/// Link a Hackatime project and recompute tracked hours.
#[utoipa::path(
    post,
    path = "/api/projects/{id}/hackatime",
    tag = PROJECT_TAG,
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    request_body = HackatimeRequestDto,
    responses(
        (status = 200, description = "Project with the new link", body = ProjectDto),
        (status = 400, description = "Missing name or already linked", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not on the owning team", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto)
    ),
)]
pub async fn link_hackatime(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<HackatimeRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &state.settings_cache, &session)
        .require(&[])
        .await?;

    let hackatime = HackatimeService::new(&state.http_client);
    let project = ProjectService::new(&state.db)
        .link_hackatime(&member, id, payload, &hackatime)
        .await?;

    Ok((StatusCode::OK, Json(project)))
}

/// Unlink a Hackatime project and recompute tracked hours.
#[utoipa::path(
    delete,
    path = "/api/projects/{id}/hackatime",
    tag = PROJECT_TAG,
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    request_body = HackatimeRequestDto,
    responses(
        (status = 200, description = "Project without the link", body = ProjectDto),
        (status = 400, description = "Missing name", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not on the owning team", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto)
    ),
)]
pub async fn unlink_hackatime(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<HackatimeRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &state.settings_cache, &session)
        .require(&[])
        .await?;

    let hackatime = HackatimeService::new(&state.http_client);
    let project = ProjectService::new(&state.db)
        .unlink_hackatime(&member, id, payload, &hackatime)
        .await?;

    Ok((StatusCode::OK, Json(project)))
}

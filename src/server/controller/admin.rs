//! Admin back office: members, settings, content CRUD, ticket checks and project review.
//!
//! Every handler except `check_auth` requires the caller to be on the admin allow-list.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, IdQuery, SuccessDto},
        event::{EventDto, EventInputDto, TicketVerificationDto, VerifyTicketDto},
        member::{IsAdminDto, MemberDetailDto, MemberSummaryDto, SearchQuery, UpdateMemberDto},
        news::{NewsDto, NewsInputDto},
        project::{ProjectDto, ProjectStatusDto},
        settings::HackathonSettingsDto,
        store::{StoreItemDto, StoreItemInputDto},
        vote::VoteTallyDto,
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            session::AuthSession,
        },
        service::{
            event::EventService, member::MemberService, news::NewsService,
            project::ProjectService, settings::SettingsService, store::StoreService,
            ticket::TicketService, voting::VotingService,
        },
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

async fn require_admin(state: &AppState, session: &Session) -> Result<(), AppError> {
    AuthGuard::new(&state.db, &state.settings_cache, session)
        .require(&[Permission::Admin])
        .await?;

    Ok(())
}

/// Check whether the session member is an admin.
///
/// # Returns
/// - `200 OK` - `{isAdmin}` for the logged-in member
/// - `401 Unauthorized` - `{isAdmin: false}` when nobody is logged in
#[utoipa::path(
    get,
    path = "/api/admin/check-auth",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Admin status", body = IsAdminDto),
        (status = 401, description = "Not authenticated", body = IsAdminDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_auth(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let Some(slack_id) = AuthSession::new(&session).get_slack_id().await? else {
        return Ok((StatusCode::UNAUTHORIZED, Json(IsAdminDto { is_admin: false })));
    };

    let is_admin = SettingsService::new(&state.db, &state.settings_cache)
        .is_admin(&slack_id)
        .await?;

    Ok((StatusCode::OK, Json(IsAdminDto { is_admin })))
}

/// List every member.
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "All members", body = Vec<MemberSummaryDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let members = MemberService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(members)))
}

/// Search members by name, email, slack name or slack id.
///
/// At most 20 results; a blank query returns an empty list.
#[utoipa::path(
    get,
    path = "/api/admin/search",
    tag = ADMIN_TAG,
    params(
        ("q" = Option<String>, Query, description = "Case-insensitive search text")
    ),
    responses(
        (status = 200, description = "Matching members", body = Vec<MemberSummaryDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn search_users(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<SearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let members = MemberService::new(&state.db).search(&params.q).await?;

    Ok((StatusCode::OK, Json(members)))
}

/// Get a member's full record by invite id.
#[utoipa::path(
    get,
    path = "/api/admin/user/{invite_id}",
    tag = ADMIN_TAG,
    params(
        ("invite_id" = String, Path, description = "Member invite ID")
    ),
    responses(
        (status = 200, description = "Member detail", body = MemberDetailDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
    Path(invite_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let member = MemberService::new(&state.db)
        .get_detail(&invite_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok((StatusCode::OK, Json(member)))
}

/// Ban or unban a member and set their XP.
///
/// # Returns
/// - `200 OK` - The updated member
/// - `400 Bad Request` - Negative XP
/// - `404 Not Found` - Member not found
#[utoipa::path(
    put,
    path = "/api/admin/user/{invite_id}",
    tag = ADMIN_TAG,
    params(
        ("invite_id" = String, Path, description = "Member invite ID")
    ),
    request_body = UpdateMemberDto,
    responses(
        (status = 200, description = "Updated member", body = MemberDetailDto),
        (status = 400, description = "Invalid update", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    Path(invite_id): Path<String>,
    Json(payload): Json<UpdateMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let member = MemberService::new(&state.db)
        .update(&invite_id, payload.into())
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok((StatusCode::OK, Json(member)))
}

/// Get every setting with its typed value.
#[utoipa::path(
    get,
    path = "/api/admin/settings",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Typed settings", body = HackathonSettingsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn get_settings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let settings = SettingsService::new(&state.db, &state.settings_cache)
        .settings()
        .await?;

    Ok((StatusCode::OK, Json(settings.into_dto())))
}

/// Store every setting and rebuild the schedule from the start and end dates.
///
/// The admin allow-list is never written by this endpoint.
#[utoipa::path(
    post,
    path = "/api/admin/settings",
    tag = ADMIN_TAG,
    request_body = HackathonSettingsDto,
    responses(
        (status = 200, description = "Stored settings", body = HackathonSettingsDto),
        (status = 400, description = "Invalid dates", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn update_settings(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<HackathonSettingsDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let settings = SettingsService::new(&state.db, &state.settings_cache)
        .update(payload)
        .await?;

    Ok((StatusCode::OK, Json(settings.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/admin/events",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "All events", body = Vec<EventDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn get_events(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let events = EventService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(events)))
}

#[utoipa::path(
    post,
    path = "/api/admin/events",
    tag = ADMIN_TAG,
    request_body = EventInputDto,
    responses(
        (status = 201, description = "Event created", body = EventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<EventInputDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let event = EventService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(event)))
}

#[utoipa::path(
    put,
    path = "/api/admin/events",
    tag = ADMIN_TAG,
    request_body = EventInputDto,
    responses(
        (status = 200, description = "Event updated", body = EventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<EventInputDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let event = EventService::new(&state.db).update(payload).await?;

    Ok((StatusCode::OK, Json(event)))
}

#[utoipa::path(
    delete,
    path = "/api/admin/events",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Query, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event deleted", body = SuccessDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<IdQuery>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    EventService::new(&state.db).delete(params.id).await?;

    Ok((StatusCode::OK, Json(SuccessDto::new("Event deleted"))))
}

/// Check a ticket QR payload at the door.
///
/// The response status follows the verification outcome: `200` for a valid ticket, `400`
/// for malformed data, `404` for an unknown member or event, `401` when the member never
/// bought the event.
#[utoipa::path(
    post,
    path = "/api/admin/events/verify-ticket",
    tag = ADMIN_TAG,
    request_body = VerifyTicketDto,
    responses(
        (status = 200, description = "Valid ticket", body = TicketVerificationDto),
        (status = 400, description = "Malformed ticket", body = TicketVerificationDto),
        (status = 401, description = "Ticket not purchased", body = TicketVerificationDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Unknown member or event", body = TicketVerificationDto)
    ),
)]
pub async fn verify_ticket(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<VerifyTicketDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let verification = TicketService::new(&state.db)
        .verify(payload.ticket_data.as_deref())
        .await?;

    Ok((verification.status(), Json(verification.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/admin/news",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "All news items", body = Vec<NewsDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn get_news(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let news = NewsService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(news)))
}

#[utoipa::path(
    post,
    path = "/api/admin/news",
    tag = ADMIN_TAG,
    request_body = NewsInputDto,
    responses(
        (status = 201, description = "News item created", body = NewsDto),
        (status = 400, description = "Invalid news data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn create_news(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<NewsInputDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let news = NewsService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(news)))
}

#[utoipa::path(
    put,
    path = "/api/admin/news",
    tag = ADMIN_TAG,
    request_body = NewsInputDto,
    responses(
        (status = 200, description = "News item updated", body = NewsDto),
        (status = 400, description = "Invalid news data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "News item not found", body = ErrorDto)
    ),
)]
pub async fn update_news(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<NewsInputDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let news = NewsService::new(&state.db).update(payload).await?;

    Ok((StatusCode::OK, Json(news)))
}

#[utoipa::path(
    delete,
    path = "/api/admin/news",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Query, description = "News item ID")
    ),
    responses(
        (status = 200, description = "News item deleted", body = SuccessDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "News item not found", body = ErrorDto)
    ),
)]
pub async fn delete_news(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<IdQuery>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    NewsService::new(&state.db).delete(params.id).await?;

    Ok((StatusCode::OK, Json(SuccessDto::new("News item deleted"))))
}

#[utoipa::path(
    get,
    path = "/api/admin/store",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Store catalog", body = Vec<StoreItemDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn get_store_items(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let items = StoreService::new(&state.db).catalog().await?;

    Ok((StatusCode::OK, Json(items)))
}

#[utoipa::path(
    post,
    path = "/api/admin/store",
    tag = ADMIN_TAG,
    request_body = StoreItemInputDto,
    responses(
        (status = 201, description = "Item created", body = StoreItemDto),
        (status = 400, description = "Invalid item data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn create_store_item(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<StoreItemInputDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let item = StoreService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    put,
    path = "/api/admin/store",
    tag = ADMIN_TAG,
    request_body = StoreItemInputDto,
    responses(
        (status = 200, description = "Item updated", body = StoreItemDto),
        (status = 400, description = "Invalid item data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto)
    ),
)]
pub async fn update_store_item(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<StoreItemInputDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let item = StoreService::new(&state.db).update(payload).await?;

    Ok((StatusCode::OK, Json(item)))
}

#[utoipa::path(
    delete,
    path = "/api/admin/store",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Query, description = "Store item ID")
    ),
    responses(
        (status = 200, description = "Item deleted", body = SuccessDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto)
    ),
)]
pub async fn delete_store_item(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<IdQuery>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    StoreService::new(&state.db).delete(params.id).await?;

    Ok((StatusCode::OK, Json(SuccessDto::new("Item deleted"))))
}

/// Set a project's review status.
///
/// A rejection reason is stored only when the status is `Rejected`.
#[utoipa::path(
    put,
    path = "/api/admin/projects/{id}/status",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    request_body = ProjectStatusDto,
    responses(
        (status = 200, description = "Updated project", body = ProjectDto),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto)
    ),
)]
pub async fn set_project_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<ProjectStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let project = ProjectService::new(&state.db)
        .set_status(id, payload)
        .await?;

    Ok((StatusCode::OK, Json(project)))
}

/// Vote counts per project, most votes first.
#[utoipa::path(
    get,
    path = "/api/admin/votes",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Vote tally", body = Vec<VoteTallyDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn get_votes(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let tally = VotingService::new(&state.db).tally().await?;

    Ok((StatusCode::OK, Json(tally)))
}

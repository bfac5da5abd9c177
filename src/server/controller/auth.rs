use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        member::{
            BanStatusDto, InviteCodeDto, InviteResponseDto, SyncResponseDto, VerifyEventCodeDto,
        },
    },
    server::{
        data::member::MemberRepository,
        error::{
            auth::{ban_message, AuthError},
            AppError,
        },
        middleware::session::{AuthSession, CsrfSession, OAuthFlowSession},
        service::{
            auth::AuthService,
            member::MemberService,
            registration::{RegistrationService, SyncOutcome},
            slack::SlackService,
        },
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

#[derive(Deserialize)]
pub struct LoginParams {
    pub admin_code: Option<String>,
}

/// Query parameters the identity provider sends back to the callback.
///
/// The provider sends either `code` and `state`, or `error` when the user declined.
#[derive(Deserialize)]
pub struct CallbackParams {
    pub state: Option<String>,
    pub code: Option<String>,
    pub error: Option<String>,
}

/// Redirect to the Hack Club identity provider.
///
/// Stores a CSRF token in the session. When `admin_code` matches the active bootstrap
/// code, the session is marked so the member logging in is added to the admin list.
///
/// # Returns
/// - `307 Temporary Redirect` - To the provider's authorization page
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    params(
        ("admin_code" = Option<String>, Query, description = "One-time admin bootstrap code")
    ),
    responses(
        (status = 307, description = "Redirect to the identity provider"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<LoginParams>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.http_client, &state.oauth_client);

    if let Some(code) = params.admin_code {
        let set_admin = state.admin_code_service.validate_and_consume(&code).await;
        if !set_admin {
            tracing::warn!("Login attempted with an invalid or expired admin code");
        }
        OAuthFlowSession::new(&session)
            .set_admin_flag(set_admin)
            .await?;
    }

    let (url, csrf_token) = auth_service.login_url();
    CsrfSession::new(&session)
        .set_token(csrf_token.secret().to_string())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Complete the OAuth flow.
///
/// Always answers with a redirect into the frontend; failures land on
/// `/?error=auth_failed`.
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(
        ("code" = Option<String>, Query, description = "Authorization code"),
        ("state" = Option<String>, Query, description = "CSRF state"),
        ("error" = Option<String>, Query, description = "Provider error")
    ),
    responses(
        (status = 303, description = "Redirect into the frontend")
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> impl IntoResponse {
    let path = match complete_login(&state, &session, params).await {
        Ok(path) => path,
        Err(err) => {
            tracing::warn!("OAuth callback failed: {}", err);
            "/?error=auth_failed".to_string()
        }
    };

    Redirect::to(&format!("{}{}", state.app_url, path))
}

async fn complete_login(
    state: &AppState,
    session: &Session,
    params: CallbackParams,
) -> Result<String, AppError> {
    if let Some(error) = params.error {
        return Err(AuthError::TokenExchange(error).into());
    }
    let (Some(code), Some(csrf_state)) = (params.code, params.state) else {
        return Err(AppError::BadRequest("Missing code or state".to_string()));
    };

    validate_csrf(session, &csrf_state).await?;
    let set_admin = OAuthFlowSession::new(session).take_admin_flag().await?;

    let authenticated = AuthService::new(&state.http_client, &state.oauth_client)
        .callback(code)
        .await?;

    let slack = SlackService::new(&state.http_client, state.slack_bot_token.as_deref());
    let outcome = RegistrationService::new(&state.db, &state.settings_cache, slack)
        .resolve_login(authenticated.profile, set_admin)
        .await?;

    if let Some(slack_id) = outcome.session_slack_id() {
        let auth_session = AuthSession::new(session);
        auth_session.set_slack_id(slack_id).await?;
        auth_session
            .set_access_token(authenticated.access_token)
            .await?;
    }

    Ok(outcome.redirect_path())
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    if stored_state.as_deref() == Some(csrf_state) {
        return Ok(());
    }

    Err(AppError::AuthErr(AuthError::CsrfValidationFailed))
}

/// Clear the session and return to the landing page.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 303, description = "Redirect to the landing page")
    ),
)]
pub async fn logout(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    AuthSession::new(&session).clear().await;

    Redirect::to(&format!("{}/", state.app_url))
}

/// Refresh the session member from the identity provider and Slack.
///
/// # Returns
/// - `200 OK` - `{authenticated: true, user}`
/// - `401 Unauthorized` - No session, or the member no longer exists (session cleared)
/// - `403 Forbidden` - The member is banned (session cleared)
#[utoipa::path(
    post,
    path = "/api/auth/sync",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Refreshed member", body = SyncResponseDto),
        (status = 401, description = "Not authenticated", body = SyncResponseDto),
        (status = 403, description = "Member is banned", body = SyncResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sync(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_session = AuthSession::new(&session);
    let Some(slack_id) = auth_session.get_slack_id().await? else {
        return Ok((StatusCode::UNAUTHORIZED, Json(signed_out(None, None))));
    };

    let profile = match auth_session.get_access_token().await? {
        Some(token) => AuthService::new(&state.http_client, &state.oauth_client)
            .fetch_profile(&token)
            .await
            .inspect_err(|err| tracing::warn!("Failed to refresh provider profile: {}", err))
            .ok(),
        None => None,
    };

    let slack = SlackService::new(&state.http_client, state.slack_bot_token.as_deref());
    let outcome = RegistrationService::new(&state.db, &state.settings_cache, slack)
        .sync(&slack_id, profile)
        .await?;

    match outcome {
        SyncOutcome::NotFound => {
            auth_session.clear().await;
            Ok((
                StatusCode::UNAUTHORIZED,
                Json(signed_out(Some("user_not_found"), None)),
            ))
        }
        SyncOutcome::Banned(reason) => {
            auth_session.clear().await;
            Ok((
                StatusCode::FORBIDDEN,
                Json(signed_out(Some("user_banned"), reason)),
            ))
        }
        SyncOutcome::Synced(member) => {
            let user = MemberService::new(&state.db).current_user(member).await?;
            Ok((
                StatusCode::OK,
                Json(SyncResponseDto {
                    authenticated: true,
                    user: Some(user),
                    reason: None,
                    ban_reason: None,
                }),
            ))
        }
    }
}

fn signed_out(reason: Option<&str>, ban_reason: Option<String>) -> SyncResponseDto {
    SyncResponseDto {
        authenticated: false,
        user: None,
        reason: reason.map(str::to_string),
        ban_reason,
    }
}

/// Report whether the session member is banned.
///
/// Anonymous sessions and unknown members are reported as not banned.
#[utoipa::path(
    get,
    path = "/api/auth/check-ban",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Ban status", body = BanStatusDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_ban(
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

    let status = match member {
        Some(member) if member.banned => BanStatusDto {
            banned: true,
            reason: Some(ban_message(member.ban_reason.as_deref())),
        },
        _ => BanStatusDto {
            banned: false,
            reason: None,
        },
    };

    Ok((StatusCode::OK, Json(status)))
}

/// Complete registration with the event code, phone number and birthday.
///
/// # Returns
/// - `200 OK` - Registration complete
/// - `400 Bad Request` - A field is missing or the birthday is malformed
/// - `401 Unauthorized` - No session, or the event code is wrong
/// - `403 Forbidden` - Sign-ups closed or unconfigured, or age out of bounds
/// - `404 Not Found` - Member not found
#[utoipa::path(
    post,
    path = "/api/auth/verify-event-code",
    tag = AUTH_TAG,
    request_body = VerifyEventCodeDto,
    responses(
        (status = 200, description = "Registration complete", body = SuccessDto),
        (status = 400, description = "Missing or invalid fields", body = ErrorDto),
        (status = 401, description = "Not authenticated or wrong code", body = ErrorDto),
        (status = 403, description = "Sign-ups closed or age out of bounds", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_event_code(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<VerifyEventCodeDto>,
) -> Result<impl IntoResponse, AppError> {
    let Some(slack_id) = AuthSession::new(&session).get_slack_id().await? else {
        return Err(AuthError::UserNotInSession.into());
    };

    let slack = SlackService::new(&state.http_client, state.slack_bot_token.as_deref());
    RegistrationService::new(&state.db, &state.settings_cache, slack)
        .verify_event_code(&slack_id, payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(SuccessDto::new("Event code verified successfully")),
    ))
}

/// Check an invite code before starting the OAuth flow.
#[utoipa::path(
    post,
    path = "/api/auth/invite",
    tag = AUTH_TAG,
    request_body = InviteCodeDto,
    responses(
        (status = 200, description = "Invite code accepted", body = InviteResponseDto),
        (status = 400, description = "Missing invite code", body = ErrorDto),
        (status = 401, description = "Invalid invite code", body = ErrorDto),
        (status = 403, description = "Sign-ups closed", body = ErrorDto)
    ),
)]
pub async fn invite(
    State(state): State<AppState>,
    Json(payload): Json<InviteCodeDto>,
) -> Result<impl IntoResponse, AppError> {
    let slack = SlackService::new(&state.http_client, state.slack_bot_token.as_deref());
    let response = RegistrationService::new(&state.db, &state.settings_cache, slack)
        .validate_invite(payload.invite_code)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

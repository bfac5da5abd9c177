use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        settings::{HackathonDataDto, PublicSettingsDto},
    },
    server::{error::AppError, service::settings::SettingsService, state::AppState},
};

/// Tag for grouping public settings endpoints in OpenAPI documentation
pub static SETTINGS_TAG: &str = "settings";

/// Get every public setting.
///
/// `"true"` and `"false"` values are returned as booleans. The event code is never included.
#[utoipa::path(
    get,
    path = "/api/settings",
    tag = SETTINGS_TAG,
    responses(
        (status = 200, description = "Public settings", body = PublicSettingsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_settings(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let settings = SettingsService::new(&state.db, &state.settings_cache)
        .public_settings()
        .await?;

    Ok((StatusCode::OK, Json(settings)))
}

/// Get the hackathon schedule.
#[utoipa::path(
    get,
    path = "/api/hackathon-data",
    tag = SETTINGS_TAG,
    responses(
        (status = 200, description = "Schedule and admin ids", body = HackathonDataDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hackathon_data(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let data = SettingsService::new(&state.db, &state.settings_cache)
        .hackathon_data()
        .await?;

    Ok((StatusCode::OK, Json(data)))
}

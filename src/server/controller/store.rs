use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        store::{
            PurchaseRequestDto, PurchaseResponseDto, StoreItemDto, ToggleUsageDto,
            ToggleUsageResponseDto,
        },
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::store::StoreService,
        state::AppState,
    },
};

/// Tag for grouping store endpoints in OpenAPI documentation
pub static STORE_TAG: &str = "store";

/// Get the store catalog with stock status and linked events.
#[utoipa::path(
    get,
    path = "/api/store",
    tag = STORE_TAG,
    responses(
        (status = 200, description = "Store catalog", body = Vec<StoreItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_catalog(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let items = StoreService::new(&state.db).catalog().await?;

    Ok((StatusCode::OK, Json(items)))
}

/// Buy one unit of a store item with XP.
///
/// # Returns
/// - `200 OK` - Purchase record and remaining XP
/// - `400 Bad Request` - Missing item id, out of stock, insufficient XP or limit reached
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Item not found
/// - `409 Conflict` - The balance or stock changed during the purchase
#[utoipa::path(
    post,
    path = "/api/store/purchase",
    tag = STORE_TAG,
    request_body = PurchaseRequestDto,
    responses(
        (status = 200, description = "Purchase complete", body = PurchaseResponseDto),
        (status = 400, description = "Purchase not allowed", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 409, description = "Concurrent update", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn purchase(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<PurchaseRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &state.settings_cache, &session)
        .require(&[])
        .await?;

    let response = StoreService::new(&state.db)
        .purchase(&member.slack_id, payload.item_id)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Mark one of the caller's purchases as used or unused.
#[utoipa::path(
    post,
    path = "/api/store/toggle-usage",
    tag = STORE_TAG,
    request_body = ToggleUsageDto,
    responses(
        (status = 200, description = "Purchase updated", body = ToggleUsageResponseDto),
        (status = 400, description = "Missing parameters or invalid purchase index", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 409, description = "Concurrent update", body = ErrorDto)
    ),
)]
pub async fn toggle_usage(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ToggleUsageDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &state.settings_cache, &session)
        .require(&[])
        .await?;

    let response = StoreService::new(&state.db)
        .toggle_usage(&member.slack_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

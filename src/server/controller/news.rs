use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, news::NewsDto},
    server::{error::AppError, service::news::NewsService, state::AppState},
};

/// Tag for grouping news endpoints in OpenAPI documentation
pub static NEWS_TAG: &str = "news";

/// Get published news with markdown rendered to HTML.
#[utoipa::path(
    get,
    path = "/api/news",
    tag = NEWS_TAG,
    responses(
        (status = 200, description = "All news items", body = Vec<NewsDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_news(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let news = NewsService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(news)))
}

use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{
        admin, auth, event, intercom, leaderboard, news, project, settings, store, team, user,
        voting,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Hackboard API", description = "Hackathon registration, teams, projects and store"),
    tags(
        (name = "auth", description = "Login, registration and session endpoints"),
        (name = "user", description = "Current member"),
        (name = "team", description = "Team formation"),
        (name = "project", description = "Project submission, devlogs and Hackatime links"),
        (name = "store", description = "XP store"),
        (name = "event", description = "Event schedule"),
        (name = "news", description = "News feed"),
        (name = "settings", description = "Public hackathon settings"),
        (name = "voting", description = "Pairwise project voting"),
        (name = "leaderboard", description = "XP rankings"),
        (name = "intercom", description = "Support chat identity"),
        (name = "admin", description = "Admin back office"),
    )
)]
struct ApiDoc;

/// Builds every API route and serves the generated OpenAPI document at `/api/openapi.json`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::callback))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::sync))
        .routes(routes!(auth::check_ban))
        .routes(routes!(auth::verify_event_code))
        .routes(routes!(auth::invite))
        .routes(routes!(user::get_me))
        .routes(routes!(intercom::get_token))
        .routes(routes!(team::get_teams))
        .routes(routes!(team::create_team))
        .routes(routes!(team::join_team))
        .routes(routes!(team::request_to_join))
        .routes(routes!(team::leave_team))
        .routes(routes!(project::get_projects))
        .routes(routes!(project::create_project))
        .routes(routes!(project::get_project, project::update_project))
        .routes(routes!(project::add_devlog))
        .routes(routes!(project::link_hackatime, project::unlink_hackatime))
        .routes(routes!(store::get_catalog))
        .routes(routes!(store::purchase))
        .routes(routes!(store::toggle_usage))
        .routes(routes!(event::get_events))
        .routes(routes!(news::get_news))
        .routes(routes!(settings::get_settings))
        .routes(routes!(settings::get_hackathon_data))
        .routes(routes!(voting::get_pair, voting::cast_vote))
        .routes(routes!(leaderboard::get_leaderboard))
        .routes(routes!(admin::check_auth))
        .routes(routes!(admin::get_users))
        .routes(routes!(admin::search_users))
        .routes(routes!(admin::get_user, admin::update_user))
        .routes(routes!(admin::get_settings, admin::update_settings))
        .routes(routes!(
            admin::get_events,
            admin::create_event,
            admin::update_event,
            admin::delete_event
        ))
        .routes(routes!(admin::verify_ticket))
        .routes(routes!(
            admin::get_news,
            admin::create_news,
            admin::update_news,
            admin::delete_news
        ))
        .routes(routes!(
            admin::get_store_items,
            admin::create_store_item,
            admin::update_store_item,
            admin::delete_store_item
        ))
        .routes(routes!(admin::set_project_status))
        .routes(routes!(admin::get_votes))
        .split_for_parts();

    router
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/openapi.json", get(move || async move { Json(api) }))
}

//! Wire DTOs for the JSON API.
//!
//! These types define the request and response bodies of every endpoint. They carry serde
//! derives with camelCase field names and `utoipa::ToSchema` for the OpenAPI document, and
//! hold no behavior; conversion from domain models lives in `server::model`.

pub mod api;
pub mod event;
pub mod leaderboard;
pub mod member;
pub mod news;
pub mod project;
pub mod settings;
pub mod store;
pub mod team;
pub mod vote;

//! HTTP request handlers.
//!
//! Each submodule covers one resource. Handlers check access through `AuthGuard`, hand the
//! request body to a service and map the result to a JSON response.

pub mod admin;
pub mod auth;
pub mod event;
pub mod intercom;
pub mod leaderboard;
pub mod news;
pub mod project;
pub mod settings;
pub mod store;
pub mod team;
pub mod user;
pub mod voting;

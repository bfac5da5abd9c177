//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They hold the business rules
//! (validation, eligibility checks, status transitions), coordinate multiple repositories
//! inside transactions, and call the external Hack Club, Slack and Hackatime APIs.
//!
//! Services work with domain models from `server::model` and return DTOs or domain models to
//! the controllers. Each is constructed per request from borrowed pieces of `AppState`.

pub mod admin_code;
pub mod auth;
pub mod event;
pub mod hackatime;
pub mod intercom;
pub mod leaderboard;
pub mod member;
pub mod news;
pub mod project;
pub mod registration;
pub mod settings;
pub mod slack;
pub mod store;
pub mod team;
pub mod ticket;
pub mod voting;

#[cfg(test)]
mod test;

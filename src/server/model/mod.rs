//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. JSON list columns are decoded into typed
//! vectors on the way in, so services never see raw stored text.

pub mod event;
pub mod member;
pub mod news;
pub mod project;
pub mod settings;
pub mod store;
pub mod team;
pub mod ticket;
pub mod vote;

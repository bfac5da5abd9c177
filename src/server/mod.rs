//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM over SQLite for storage.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business rules: registration, purchases, teams, projects, voting
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session accessors and the `AuthGuard`
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, HTTP clients, settings cache)
//! - **Startup** (`startup`) - Initialization of database, sessions, clients and admin bootstrap
//! - **Router** (`router`) - Axum routes and the OpenAPI document
//!
//! # Request Flow
//!
//! 1. **Router** receives the request and dispatches to a controller
//! 2. **Controller** resolves the session member through `AuthGuard` and calls a service
//! 3. **Service** applies business rules, opening a transaction for multi-row writes
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** returns the DTO as JSON, or `AppError` maps to a status and `{error}`

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

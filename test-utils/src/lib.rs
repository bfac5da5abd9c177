//! Hackboard Test Utils
//!
//! Shared testing utilities for the hackboard server. Builds isolated in-memory SQLite
//! databases with the tables a test needs, a session backed by the same database, and
//! factories for inserting members, teams, projects, events, store items, news and settings
//! with sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn purchases_item() -> Result<(), TestError> {
//!     let mut test = TestBuilder::new().with_store_tables().build().await?;
//!     let (db, session) = test.db_and_session().await?;
//!
//!     let member = factory::member::MemberFactory::new(db).xp(500).build().await?;
//!     let item = factory::store_item::create_store_item(db).await?;
//!     // ...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;

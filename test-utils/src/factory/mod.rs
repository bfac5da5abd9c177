//! Factory methods for creating test data.
//!
//! Each entity has a `*Factory` builder for customization and a `create_*` shorthand for the
//! defaults. Factories insert into the database; see `fixture` for in-memory models.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let member = factory::create_member(&db).await?;
//! let (member, team) = factory::helpers::create_member_on_team(&db, "Public").await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let member = factory::member::MemberFactory::new(&db)
//!     .slack_id("U123")
//!     .xp(250)
//!     .pending(false)
//!     .build()
//!     .await?;
//! ```

pub mod event;
pub mod helpers;
pub mod member;
pub mod news;
pub mod project;
pub mod setting;
pub mod store_item;
pub mod team;

pub use event::create_event;
pub use member::create_member;
pub use news::create_news;
pub use project::create_project;
pub use setting::create_setting;
pub use store_item::create_store_item;
pub use team::create_team;

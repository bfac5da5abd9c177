//! Test fixtures providing entity models without database insertion.
//!
//! Use fixtures for unit tests of conversions and pure business rules; use `factory` when
//! the data must exist in the database.
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let member = fixture::member::entity();
//! let sold_out = fixture::store_item::entity_builder().quantity(0).build();
//! ```

pub mod member;
pub mod store_item;

pub use member::{entity as member_entity, entity_builder as member_entity_builder};
pub use store_item::{entity as store_item_entity, entity_builder as store_item_entity_builder};

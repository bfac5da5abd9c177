use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add the entity tables a test touches, then call `build()` to get a `TestContext` with an
/// in-memory SQLite database holding exactly those tables.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Member, Team};
///
/// let test = TestBuilder::new()
///     .with_table(Member)
///     .with_table(Team)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,

    /// Use a temporary database file instead of an in-memory database.
    file_backed: bool,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            file_backed: false,
        }
    }

    /// Stores the test database in a temporary file instead of memory.
    ///
    /// Needed by tests that run writes on several pooled connections at once.
    pub fn file_backed(mut self) -> Self {
        self.file_backed = true;
        self
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// syntax. The table is created when `build()` is called.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables used by the store, purchase and ticket flows.
    ///
    /// - Member
    /// - StoreItem
    /// - Event
    pub fn with_store_tables(self) -> Self {
        self.with_table(Member)
            .with_table(StoreItem)
            .with_table(Event)
    }

    /// Adds the tables used by team and project operations.
    ///
    /// - Member
    /// - Team
    /// - Project
    pub fn with_team_tables(self) -> Self {
        self.with_table(Member).with_table(Team).with_table(Project)
    }

    /// Adds every table in the schema.
    pub fn with_all_tables(self) -> Self {
        self.with_team_tables()
            .with_table(StoreItem)
            .with_table(Event)
            .with_table(News)
            .with_table(GlobalSetting)
            .with_table(Vote)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = if self.file_backed {
            TestContext::file_backed()
        } else {
            TestContext::new()
        };

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

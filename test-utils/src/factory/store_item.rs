//! Store item factory for creating test store item entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test store items.
pub struct StoreItemFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    xp_price: i32,
    quantity: i32,
    category: String,
    limit_per_person: i32,
    event_id: Option<i32>,
}

impl<'a> StoreItemFactory<'a> {
    /// Creates a new StoreItemFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Item {id}"`
    /// - xp_price: `100`
    /// - quantity: `-1` (unlimited)
    /// - category: `"Other"`
    /// - limit_per_person: `1`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Item {}", id),
            xp_price: 100,
            quantity: -1,
            category: "Other".to_string(),
            limit_per_person: 1,
            event_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn price(mut self, xp_price: i32) -> Self {
        self.xp_price = xp_price;
        self
    }

    /// Sets remaining stock, `-1` for unlimited.
    pub fn quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the per-person purchase limit, `0` for no limit.
    pub fn limit_per_person(mut self, limit: i32) -> Self {
        self.limit_per_person = limit;
        self
    }

    pub fn event_id(mut self, event_id: Option<i32>) -> Self {
        self.event_id = event_id;
        self
    }

    pub async fn build(self) -> Result<entity::store_item::Model, DbErr> {
        let now = Utc::now();
        entity::store_item::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set("A test item".to_string()),
            xp_price: ActiveValue::Set(self.xp_price),
            quantity: ActiveValue::Set(self.quantity),
            category: ActiveValue::Set(self.category),
            limit_per_person: ActiveValue::Set(self.limit_per_person),
            event_id: ActiveValue::Set(self.event_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unlimited store item priced at 100 XP.
pub async fn create_store_item(
    db: &DatabaseConnection,
) -> Result<entity::store_item::Model, DbErr> {
    StoreItemFactory::new(db).build().await
}

//! Store item fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::store_item;

pub const DEFAULT_NAME: &str = "Sticker Pack";
pub const DEFAULT_PRICE: i32 = 100;

/// Creates a store item entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - xp_price: `100`
/// - quantity: `-1` (unlimited)
/// - limit_per_person: `1`
/// - category: `"Other"`
pub fn entity() -> store_item::Model {
    let created = Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).single().unwrap_or_default();
    store_item::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        description: "Five holographic stickers".to_string(),
        xp_price: DEFAULT_PRICE,
        quantity: -1,
        category: "Other".to_string(),
        limit_per_person: 1,
        event_id: None,
        created_at: created,
        updated_at: created,
    }
}

/// Creates a builder for customizing a store item fixture.
pub fn entity_builder() -> StoreItemEntityBuilder {
    StoreItemEntityBuilder { entity: entity() }
}

pub struct StoreItemEntityBuilder {
    entity: store_item::Model,
}

impl StoreItemEntityBuilder {
    pub fn quantity(mut self, quantity: i32) -> Self {
        self.entity.quantity = quantity;
        self
    }

    pub fn price(mut self, xp_price: i32) -> Self {
        self.entity.xp_price = xp_price;
        self
    }

    pub fn limit_per_person(mut self, limit: i32) -> Self {
        self.entity.limit_per_person = limit;
        self
    }

    pub fn event_id(mut self, event_id: Option<i32>) -> Self {
        self.entity.event_id = event_id;
        self
    }

    pub fn build(self) -> store_item::Model {
        self.entity
    }
}

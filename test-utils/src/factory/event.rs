//! Event factory for creating test event entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Factory for creating test events.
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    day_of_week: String,
    hour: String,
    tags: Vec<String>,
    xp_to_buy: Option<i32>,
    max_attendees: Option<i32>,
    store_item_id: Option<i32>,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Event {id}"`
    /// - day_of_week: `"Saturday"`, hour: `"18:00"`
    /// - no tags and no linked store item
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Event {}", id),
            day_of_week: "Saturday".to_string(),
            hour: "18:00".to_string(),
            tags: Vec::new(),
            xp_to_buy: None,
            max_attendees: None,
            store_item_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the tag list, e.g. `&["Main event", "Limited attendees"]`.
    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn xp_to_buy(mut self, xp: Option<i32>) -> Self {
        self.xp_to_buy = xp;
        self
    }

    pub fn max_attendees(mut self, max: Option<i32>) -> Self {
        self.max_attendees = max;
        self
    }

    pub fn store_item_id(mut self, store_item_id: Option<i32>) -> Self {
        self.store_item_id = store_item_id;
        self
    }

    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        let now = Utc::now();
        entity::event::ActiveModel {
            name: ActiveValue::Set(self.name),
            location: ActiveValue::Set("Main hall".to_string()),
            description: ActiveValue::Set("A test event".to_string()),
            day_of_week: ActiveValue::Set(self.day_of_week),
            hour: ActiveValue::Set(self.hour),
            tags: ActiveValue::Set(json!(self.tags).to_string()),
            xp_to_buy: ActiveValue::Set(self.xp_to_buy),
            max_attendees: ActiveValue::Set(self.max_attendees),
            store_item_id: ActiveValue::Set(self.store_item_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an untagged event with default values.
pub async fn create_event(db: &DatabaseConnection) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db).build().await
}

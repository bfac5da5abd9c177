use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::{
    data::encode_column,
    model::event::{Event, EventParam},
};

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: EventParam) -> Result<Event, DbErr> {
        let now = Utc::now();
        let tags: Vec<String> = param.tags.iter().map(|tag| tag.to_string()).collect();
        let entity = entity::event::ActiveModel {
            name: ActiveValue::Set(param.name),
            location: ActiveValue::Set(param.location),
            description: ActiveValue::Set(param.description),
            day_of_week: ActiveValue::Set(param.day_of_week),
            hour: ActiveValue::Set(param.hour),
            tags: ActiveValue::Set(encode_column(&tags, "tags")?),
            xp_to_buy: ActiveValue::Set(param.xp_to_buy),
            max_attendees: ActiveValue::Set(param.max_attendees),
            store_item_id: ActiveValue::Set(param.store_item_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Event::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Event>, DbErr> {
        let entity = entity::prelude::Event::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Event::from_entity))
    }

    /// Gets every event ordered by day and hour.
    pub async fn get_all(&self) -> Result<Vec<Event>, DbErr> {
        let entities = entity::prelude::Event::find()
            .order_by_asc(entity::event::Column::DayOfWeek)
            .order_by_asc(entity::event::Column::Hour)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Event::from_entity).collect())
    }

    /// Gets the events unlocked by any of the given store items.
    pub async fn get_by_store_item_ids(&self, item_ids: &[i32]) -> Result<Vec<Event>, DbErr> {
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Event::find()
            .filter(entity::event::Column::StoreItemId.is_in(item_ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Event::from_entity).collect())
    }

    /// Replaces every editable field of an event.
    ///
    /// # Returns
    /// - `Ok(Some(Event))` - The updated event
    /// - `Ok(None)` - No event with that id
    /// - `Err(DbErr)` - Database error during read or update
    pub async fn update(&self, id: i32, param: EventParam) -> Result<Option<Event>, DbErr> {
        let Some(entity) = entity::prelude::Event::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let tags: Vec<String> = param.tags.iter().map(|tag| tag.to_string()).collect();
        let mut active = entity.into_active_model();
        active.name = ActiveValue::Set(param.name);
        active.location = ActiveValue::Set(param.location);
        active.description = ActiveValue::Set(param.description);
        active.day_of_week = ActiveValue::Set(param.day_of_week);
        active.hour = ActiveValue::Set(param.hour);
        active.tags = ActiveValue::Set(encode_column(&tags, "tags")?);
        active.xp_to_buy = ActiveValue::Set(param.xp_to_buy);
        active.max_attendees = ActiveValue::Set(param.max_attendees);
        active.store_item_id = ActiveValue::Set(param.store_item_id);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;
        Ok(Some(Event::from_entity(entity)))
    }

    /// Deletes an event.
    ///
    /// # Returns
    /// - `Ok(true)` - Deleted
    /// - `Ok(false)` - No event with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Event::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}

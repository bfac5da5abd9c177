use sea_orm::DatabaseConnection;

use crate::{
    model::event::{EventDto, EventInputDto},
    server::{
        data::event::EventRepository,
        error::AppError,
        model::event::{Event, EventParam},
    },
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<EventDto>, AppError> {
        let events = EventRepository::new(self.db).get_all().await?;

        Ok(events.into_iter().map(Event::into_dto).collect())
    }

    pub async fn create(&self, dto: EventInputDto) -> Result<EventDto, AppError> {
        let param = EventParam::from_dto(dto)?;
        let event = EventRepository::new(self.db).create(param).await?;

        Ok(event.into_dto())
    }

    /// Replaces an event's fields.
    ///
    /// # Returns
    /// - `Ok(EventDto)` - The updated event
    /// - `Err(AppError::BadRequest)` - Missing id or invalid fields
    /// - `Err(AppError::NotFound)` - No event with that id
    pub async fn update(&self, dto: EventInputDto) -> Result<EventDto, AppError> {
        let id = dto
            .id
            .ok_or_else(|| AppError::BadRequest("Event ID is required".to_string()))?;
        let param = EventParam::from_dto(dto)?;

        let event = EventRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        Ok(event.into_dto())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !EventRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Event not found".to_string()));
        }
        Ok(())
    }
}

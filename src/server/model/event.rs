//! Event domain models and parameters.

use chrono::{DateTime, Utc};
use std::{fmt, str::FromStr};

use crate::{
    model::{
        event::{EventDto, EventInputDto, TicketEventDto},
        store::RelatedEventDto,
    },
    server::{error::AppError, util::json::decode_list},
};

/// Label that changes how an event is shown or accessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTag {
    MainEvent,
    /// Attendance requires buying the linked store item.
    StoreUnlockable,
    LimitedAttendees,
}

impl EventTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MainEvent => "Main event",
            Self::StoreUnlockable => "Store-unlockable",
            Self::LimitedAttendees => "Limited attendees",
        }
    }
}

impl fmt::Display for EventTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Main event" => Ok(Self::MainEvent),
            "Store-unlockable" => Ok(Self::StoreUnlockable),
            "Limited attendees" => Ok(Self::LimitedAttendees),
            other => Err(format!("Invalid event tag '{}'", other)),
        }
    }
}

/// Scheduled hackathon event.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub description: String,
    pub day_of_week: String,
    pub hour: String,
    pub tags: Vec<EventTag>,
    pub xp_to_buy: Option<i32>,
    pub max_attendees: Option<i32>,
    /// Store item that unlocks this event, if any.
    pub store_item_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Converts an entity model to an event domain model at the repository boundary.
    ///
    /// Unknown tags are dropped with a warning.
    pub fn from_entity(entity: entity::event::Model) -> Self {
        let tags = decode_list::<String>(&entity.tags, "tags")
            .into_iter()
            .filter_map(|tag| match tag.parse::<EventTag>() {
                Ok(tag) => Some(tag),
                Err(err) => {
                    tracing::warn!(event_id = entity.id, "{}; dropping", err);
                    None
                }
            })
            .collect();

        Self {
            id: entity.id,
            name: entity.name,
            location: entity.location,
            description: entity.description,
            day_of_week: entity.day_of_week,
            hour: entity.hour,
            tags,
            xp_to_buy: entity.xp_to_buy,
            max_attendees: entity.max_attendees,
            store_item_id: entity.store_item_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn has_tag(&self, tag: EventTag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn into_dto(self) -> EventDto {
        let is_store_unlockable = self.has_tag(EventTag::StoreUnlockable);
        let has_limited_attendees = self.has_tag(EventTag::LimitedAttendees);

        EventDto {
            id: self.id,
            is_main_event: self.has_tag(EventTag::MainEvent),
            is_store_unlockable,
            has_limited_attendees,
            xp_to_buy: self.xp_to_buy.filter(|_| is_store_unlockable),
            max_attendees: self.max_attendees.filter(|_| has_limited_attendees),
            tags: self.tags.iter().map(|tag| tag.to_string()).collect(),
            name: self.name,
            location: self.location,
            description: self.description,
            day_of_week: self.day_of_week,
            hour: self.hour,
            store_item_id: self.store_item_id,
        }
    }

    pub fn to_related_dto(&self) -> RelatedEventDto {
        RelatedEventDto {
            id: self.id,
            name: self.name.clone(),
            day_of_week: self.day_of_week.clone(),
            hour: self.hour.clone(),
        }
    }

    pub fn into_ticket_dto(self) -> TicketEventDto {
        TicketEventDto {
            name: self.name,
            location: self.location,
            day_of_week: self.day_of_week,
            hour: self.hour,
        }
    }
}

/// Fields written when creating or updating an event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventParam {
    pub name: String,
    pub location: String,
    pub description: String,
    pub day_of_week: String,
    pub hour: String,
    pub tags: Vec<EventTag>,
    pub xp_to_buy: Option<i32>,
    pub max_attendees: Option<i32>,
    pub store_item_id: Option<i32>,
}

impl EventParam {
    /// Validates an admin form body.
    ///
    /// # Returns
    /// - `Ok(EventParam)` - Trimmed fields with parsed tags
    /// - `Err(AppError::BadRequest)` - Blank name, day or hour, or an unknown tag
    pub fn from_dto(dto: EventInputDto) -> Result<Self, AppError> {
        let name = dto.name.trim().to_string();
        let day_of_week = dto.day_of_week.trim().to_string();
        let hour = dto.hour.trim().to_string();
        if name.is_empty() || day_of_week.is_empty() || hour.is_empty() {
            return Err(AppError::BadRequest(
                "Name, day of week and hour are required".to_string(),
            ));
        }

        let mut tags = Vec::with_capacity(dto.tags.len());
        for tag in &dto.tags {
            let tag = tag.parse::<EventTag>().map_err(AppError::BadRequest)?;
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        Ok(Self {
            name,
            location: dto.location.trim().to_string(),
            description: dto.description,
            day_of_week,
            hour,
            tags,
            xp_to_buy: dto.xp_to_buy,
            max_attendees: dto.max_attendees,
            store_item_id: dto.store_item_id,
        })
    }
}

//! Event ticket issuing and verification.

use sea_orm::DatabaseConnection;
use std::collections::HashSet;

use axum::http::StatusCode;

use crate::{
    model::event::{TicketUserDto, TicketVerificationDto},
    server::{
        data::{event::EventRepository, member::MemberRepository},
        error::AppError,
        model::{event::Event, member::Member, ticket::Ticket},
    },
};

/// Result of checking a scanned ticket.
#[derive(Debug)]
pub enum TicketVerification {
    MissingData,
    InvalidFormat,
    MemberNotFound,
    EventNotFound,
    /// The event has no linked store item, so it cannot be ticketed.
    EventNotTicketed,
    /// The member never bought the event's store item.
    NotPurchased { member: Member, event: Event },
    Valid { member: Member, event: Event },
}

impl TicketVerification {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingData | Self::InvalidFormat | Self::EventNotTicketed => {
                StatusCode::BAD_REQUEST
            }
            Self::MemberNotFound | Self::EventNotFound => StatusCode::NOT_FOUND,
            Self::NotPurchased { .. } => StatusCode::UNAUTHORIZED,
            Self::Valid { .. } => StatusCode::OK,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingData => "Invalid ticket data",
            Self::InvalidFormat => "Invalid ticket format",
            Self::MemberNotFound => "User not found",
            Self::EventNotFound => "Event not found",
            Self::EventNotTicketed => "Event does not require purchase",
            Self::NotPurchased { .. } => "User has not purchased access to this event",
            Self::Valid { .. } => "Valid ticket",
        }
    }

    pub fn into_dto(self) -> TicketVerificationDto {
        let valid = self.is_valid();
        let message = self.message().to_string();
        let (user, event) = match self {
            Self::NotPurchased { member, event } | Self::Valid { member, event } => (
                Some(TicketUserDto {
                    name: member.name,
                    email: member.email,
                    slack_name: member.slack_name,
                }),
                Some(event.into_ticket_dto()),
            ),
            _ => (None, None),
        };

        TicketVerificationDto {
            valid,
            message,
            user,
            event,
        }
    }
}

pub struct TicketService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Tickets for every event whose linked store item the member has bought.
    pub async fn tickets_for(&self, member: &Member) -> Result<Vec<Ticket>, AppError> {
        let item_ids: Vec<i32> = member
            .purchases
            .iter()
            .map(|purchase| purchase.item_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let events = EventRepository::new(self.db)
            .get_by_store_item_ids(&item_ids)
            .await?;

        Ok(events
            .into_iter()
            .map(|event| Ticket::new(member.slack_id.clone(), event.id))
            .collect())
    }

    /// Checks a scanned ticket string against the member's purchase records.
    pub async fn verify(&self, ticket_data: Option<&str>) -> Result<TicketVerification, AppError> {
        let Some(ticket_data) = ticket_data.filter(|data| !data.trim().is_empty()) else {
            return Ok(TicketVerification::MissingData);
        };
        let Ok(ticket) = ticket_data.parse::<Ticket>() else {
            return Ok(TicketVerification::InvalidFormat);
        };

        let Some(member) = MemberRepository::new(self.db)
            .find_by_slack_id(&ticket.slack_id)
            .await?
        else {
            return Ok(TicketVerification::MemberNotFound);
        };

        let Some(event) = EventRepository::new(self.db)
            .find_by_id(ticket.event_id)
            .await?
        else {
            return Ok(TicketVerification::EventNotFound);
        };

        let Some(store_item_id) = event.store_item_id else {
            return Ok(TicketVerification::EventNotTicketed);
        };

        if !member.has_purchased(store_item_id) {
            return Ok(TicketVerification::NotPurchased { member, event });
        }

        tracing::debug!(ticket = %ticket, "Ticket verified");

        Ok(TicketVerification::Valid { member, event })
    }
}

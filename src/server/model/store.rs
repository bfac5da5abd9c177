//! Store item domain models and parameters.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::{
    model::store::{RelatedEventDto, StoreItemDto, StoreItemInputDto},
    server::error::AppError,
};

/// Quantity value meaning the item never runs out.
pub const UNLIMITED: i32 = -1;

/// Availability of a store item, derived from its remaining quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    InStock,
    OutOfStock,
}

impl StockStatus {
    pub fn from_quantity(quantity: i32) -> Self {
        if quantity == 0 {
            Self::OutOfStock
        } else {
            Self::InStock
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InStock => f.write_str("In stock"),
            Self::OutOfStock => f.write_str("Out of stock"),
        }
    }
}

/// Item members can buy with XP.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreItem {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub xp_price: i32,
    /// Remaining stock, `UNLIMITED` when it never runs out.
    pub quantity: i32,
    pub category: String,
    /// Maximum purchases per member, `0` for no limit.
    pub limit_per_person: i32,
    /// Event this item unlocks, if any.
    pub event_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoreItem {
    pub fn from_entity(entity: entity::store_item::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            xp_price: entity.xp_price,
            quantity: entity.quantity,
            category: entity.category,
            limit_per_person: entity.limit_per_person,
            event_id: entity.event_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn stock_status(&self) -> StockStatus {
        StockStatus::from_quantity(self.quantity)
    }

    /// Quantity left after one more sale. Unlimited stock stays unlimited.
    pub fn quantity_after_sale(&self) -> i32 {
        if self.quantity > 0 {
            self.quantity - 1
        } else {
            self.quantity
        }
    }

    /// Whether a member already holding `owned` of this item may buy another.
    pub fn within_limit(&self, owned: usize) -> bool {
        self.limit_per_person <= 0 || owned < self.limit_per_person as usize
    }

    pub fn into_dto(self, related_event: Option<RelatedEventDto>) -> StoreItemDto {
        StoreItemDto {
            stock_status: self.stock_status().to_string(),
            id: self.id,
            name: self.name,
            description: self.description,
            xp_price: self.xp_price,
            quantity: self.quantity,
            category: self.category,
            limit_per_person: self.limit_per_person,
            event_id: self.event_id,
            related_event,
        }
    }
}

/// Fields written when creating or updating a store item.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreItemParam {
    pub name: String,
    pub description: String,
    pub xp_price: i32,
    pub quantity: i32,
    pub category: String,
    pub limit_per_person: i32,
    pub event_id: Option<i32>,
}

impl StoreItemParam {
    /// Validates an admin form body.
    ///
    /// # Returns
    /// - `Ok(StoreItemParam)` - Trimmed fields
    /// - `Err(AppError::BadRequest)` - Blank name, negative price or limit, or a quantity
    ///   below `UNLIMITED`
    pub fn from_dto(dto: StoreItemInputDto) -> Result<Self, AppError> {
        let name = dto.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("Name is required".to_string()));
        }
        if dto.xp_price < 0 {
            return Err(AppError::BadRequest("Price cannot be negative".to_string()));
        }
        if dto.quantity < UNLIMITED {
            return Err(AppError::BadRequest(
                "Quantity must be -1 (unlimited) or at least 0".to_string(),
            ));
        }
        if dto.limit_per_person < 0 {
            return Err(AppError::BadRequest(
                "Limit per person cannot be negative".to_string(),
            ));
        }

        let category = match dto.category.trim() {
            "" => "Other".to_string(),
            category => category.to_string(),
        };

        Ok(Self {
            name,
            description: dto.description,
            xp_price: dto.xp_price,
            quantity: dto.quantity,
            category,
            limit_per_person: dto.limit_per_person,
            event_id: dto.event_id,
        })
    }
}

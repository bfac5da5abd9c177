//! Store catalog and the XP purchase flow.

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};
use std::collections::HashMap;

use crate::{
    model::store::{
        PurchaseResponseDto, StoreItemDto, StoreItemInputDto, ToggleUsageDto,
        ToggleUsageResponseDto,
    },
    server::{
        data::{
            event::EventRepository, is_lock_conflict, member::MemberRepository,
            store_item::StoreItemRepository,
        },
        error::AppError,
        model::{
            member::PurchaseRecord,
            store::{StockStatus, StoreItem, StoreItemParam},
        },
    },
};

const CONFLICT_MESSAGE: &str = "Your purchase conflicted with another update, please try again";

pub struct StoreService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StoreService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Every store item with its derived stock status and linked event.
    pub async fn catalog(&self) -> Result<Vec<StoreItemDto>, AppError> {
        let items = StoreItemRepository::new(self.db).get_all().await?;

        let item_ids: Vec<i32> = items.iter().map(|item| item.id).collect();
        let events = EventRepository::new(self.db)
            .get_by_store_item_ids(&item_ids)
            .await?;
        let mut related = HashMap::new();
        for event in &events {
            if let Some(item_id) = event.store_item_id {
                related.entry(item_id).or_insert_with(|| event.to_related_dto());
            }
        }

        Ok(items
            .into_iter()
            .map(|item| {
                let event = related.get(&item.id).cloned();
                item.into_dto(event)
            })
            .collect())
    }

    /// Buys one unit of an item with XP.
    ///
    /// Runs in a single transaction. The member row is written with a compare-and-set on
    /// the XP balance and purchase list read at the start, and finite stock with a
    /// compare-and-set on the quantity, so two concurrent purchases cannot both pass the
    /// checks against the same state.
    ///
    /// # Returns
    /// - `Ok(PurchaseResponseDto)` - The new purchase record and remaining XP
    /// - `Err(AppError::BadRequest)` - Missing item id, out of stock, insufficient XP, or
    ///   the per-person limit is reached
    /// - `Err(AppError::NotFound)` - Member or item does not exist
    /// - `Err(AppError::Conflict)` - The member or stock changed during the purchase, or
    ///   another connection held the write lock
    pub async fn purchase(
        &self,
        slack_id: &str,
        item_id: Option<i32>,
    ) -> Result<PurchaseResponseDto, AppError> {
        let item_id =
            item_id.ok_or_else(|| AppError::BadRequest("Item ID is required".to_string()))?;

        let (record, item_name, new_xp) = match self.purchase_in_transaction(slack_id, item_id).await
        {
            Err(AppError::DbErr(err)) if is_lock_conflict(&err) => {
                tracing::debug!(slack_id, item_id, "Purchase lost a write lock race: {}", err);
                return Err(AppError::Conflict(CONFLICT_MESSAGE.to_string()));
            }
            result => result?,
        };

        Ok(PurchaseResponseDto {
            success: true,
            purchase: record.into_dto(),
            new_xp,
            message: format!("Successfully purchased {}", item_name),
        })
    }

    /// Checks and writes a purchase inside one transaction.
    ///
    /// # Returns
    /// - `Ok((record, item_name, new_xp))` - The committed purchase
    async fn purchase_in_transaction(
        &self,
        slack_id: &str,
        item_id: i32,
    ) -> Result<(PurchaseRecord, String, i32), AppError> {
        let txn = self.db.begin().await?;
        let member_repo = MemberRepository::new(&txn);
        let item_repo = StoreItemRepository::new(&txn);

        let member = member_repo
            .find_by_slack_id(slack_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        let item = item_repo
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Item not found".to_string()))?;

        check_purchase(&item, member.experience_points, member.purchase_count(item.id))?;

        let record = PurchaseRecord {
            item_id: item.id,
            item_name: item.name.clone(),
            category: item.category.clone(),
            xp_price: item.xp_price,
            purchased_at: Utc::now(),
            used: false,
            used_at: None,
        };
        let new_xp = member.experience_points - item.xp_price;
        let mut purchases = member.purchases.clone();
        purchases.push(record.clone());

        if !member_repo
            .replace_purchases(&member, new_xp, &purchases)
            .await?
        {
            return Err(AppError::Conflict(CONFLICT_MESSAGE.to_string()));
        }

        let remaining = item.quantity_after_sale();
        if remaining != item.quantity
            && !item_repo
                .set_quantity(item.id, item.quantity, remaining)
                .await?
        {
            return Err(AppError::Conflict(CONFLICT_MESSAGE.to_string()));
        }

        txn.commit().await?;

        tracing::info!(
            slack_id,
            item_id = item.id,
            xp_price = item.xp_price,
            new_xp,
            "Member purchased store item"
        );

        Ok((record, item.name, new_xp))
    }

    /// Marks one of the member's purchases as used or unused.
    ///
    /// # Returns
    /// - `Ok(ToggleUsageResponseDto)` - The updated purchase record
    /// - `Err(AppError::BadRequest)` - Missing index or used flag, or an out-of-range index
    /// - `Err(AppError::NotFound)` - Member does not exist
    /// - `Err(AppError::Conflict)` - The member's purchases changed concurrently
    pub async fn toggle_usage(
        &self,
        slack_id: &str,
        dto: ToggleUsageDto,
    ) -> Result<ToggleUsageResponseDto, AppError> {
        let (Some(index), Some(mark_as_used)) = (dto.purchase_index, dto.mark_as_used) else {
            return Err(AppError::BadRequest("Invalid parameters".to_string()));
        };

        let repo = MemberRepository::new(self.db);
        let member = repo
            .find_by_slack_id(slack_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let mut purchases = member.purchases.clone();
        let Some(purchase) = purchases.get_mut(index) else {
            return Err(AppError::BadRequest("Invalid purchase index".to_string()));
        };
        purchase.used = mark_as_used;
        purchase.used_at = mark_as_used.then(Utc::now);
        let updated = purchase.clone();

        if !repo
            .replace_purchases(&member, member.experience_points, &purchases)
            .await?
        {
            return Err(AppError::Conflict(CONFLICT_MESSAGE.to_string()));
        }

        Ok(ToggleUsageResponseDto {
            success: true,
            message: format!(
                "Item marked as {}",
                if mark_as_used { "used" } else { "unused" }
            ),
            updated_item: updated.into_dto(),
        })
    }

    pub async fn create(&self, dto: StoreItemInputDto) -> Result<StoreItemDto, AppError> {
        let param = StoreItemParam::from_dto(dto)?;
        let item = StoreItemRepository::new(self.db).create(param).await?;

        self.with_related_event(item).await
    }

    /// Replaces an item's fields.
    ///
    /// # Returns
    /// - `Ok(StoreItemDto)` - The updated item
    /// - `Err(AppError::BadRequest)` - Missing id or invalid fields
    /// - `Err(AppError::NotFound)` - No item with that id
    pub async fn update(&self, dto: StoreItemInputDto) -> Result<StoreItemDto, AppError> {
        let id = dto
            .id
            .ok_or_else(|| AppError::BadRequest("Item ID is required".to_string()))?;
        let param = StoreItemParam::from_dto(dto)?;

        let item = StoreItemRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Item not found".to_string()))?;

        self.with_related_event(item).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !StoreItemRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Item not found".to_string()));
        }
        Ok(())
    }

    async fn with_related_event(&self, item: StoreItem) -> Result<StoreItemDto, AppError> {
        let related = match item.event_id {
            Some(event_id) => EventRepository::new(self.db)
                .find_by_id(event_id)
                .await?
                .map(|event| event.to_related_dto()),
            None => None,
        };

        Ok(item.into_dto(related))
    }
}

/// Business checks for buying one more unit of `item`.
fn check_purchase(item: &StoreItem, balance: i32, owned: usize) -> Result<(), AppError> {
    if item.stock_status() != StockStatus::InStock {
        return Err(AppError::BadRequest("Item is not in stock".to_string()));
    }
    if balance < item.xp_price {
        return Err(AppError::BadRequest("Insufficient XP".to_string()));
    }
    if !item.within_limit(owned) {
        return Err(AppError::BadRequest(
            "Purchase limit reached for this item".to_string(),
        ));
    }
    Ok(())
}

//! Store item data repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::store::{StoreItem, StoreItemParam};

pub struct StoreItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StoreItemRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: StoreItemParam) -> Result<StoreItem, DbErr> {
        let now = Utc::now();
        let entity = entity::store_item::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            xp_price: ActiveValue::Set(param.xp_price),
            quantity: ActiveValue::Set(param.quantity),
            category: ActiveValue::Set(param.category),
            limit_per_person: ActiveValue::Set(param.limit_per_person),
            event_id: ActiveValue::Set(param.event_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(StoreItem::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<StoreItem>, DbErr> {
        let entity = entity::prelude::StoreItem::find_by_id(id).one(self.db).await?;

        Ok(entity.map(StoreItem::from_entity))
    }

    /// Gets every item ordered by price, cheapest first.
    pub async fn get_all(&self) -> Result<Vec<StoreItem>, DbErr> {
        let entities = entity::prelude::StoreItem::find()
            .order_by_asc(entity::store_item::Column::XpPrice)
            .order_by_asc(entity::store_item::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(StoreItem::from_entity).collect())
    }

    /// Replaces every editable field of an item.
    ///
    /// # Returns
    /// - `Ok(Some(StoreItem))` - The updated item
    /// - `Ok(None)` - No item with that id
    /// - `Err(DbErr)` - Database error during read or update
    pub async fn update(
        &self,
        id: i32,
        param: StoreItemParam,
    ) -> Result<Option<StoreItem>, DbErr> {
        let Some(entity) = entity::prelude::StoreItem::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.name = ActiveValue::Set(param.name);
        active.description = ActiveValue::Set(param.description);
        active.xp_price = ActiveValue::Set(param.xp_price);
        active.quantity = ActiveValue::Set(param.quantity);
        active.category = ActiveValue::Set(param.category);
        active.limit_per_person = ActiveValue::Set(param.limit_per_person);
        active.event_id = ActiveValue::Set(param.event_id);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;
        Ok(Some(StoreItem::from_entity(entity)))
    }

    /// Deletes an item.
    ///
    /// # Returns
    /// - `Ok(true)` - Deleted
    /// - `Ok(false)` - No item with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::StoreItem::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Sets the remaining quantity only if it still equals `expected`.
    ///
    /// # Returns
    /// - `Ok(true)` - Written
    /// - `Ok(false)` - The quantity changed concurrently or the item is gone
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_quantity(&self, id: i32, expected: i32, quantity: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::StoreItem::update_many()
            .col_expr(entity::store_item::Column::Quantity, Expr::value(quantity))
            .col_expr(entity::store_item::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::store_item::Column::Id.eq(id))
            .filter(entity::store_item::Column::Quantity.eq(expected))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}

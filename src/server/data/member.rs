//! Member data repository for database operations.
//!
//! Handles member creation on first login, profile sync, registration completion, admin
//! edits, team assignment and the compare-and-set purchase write used by the store.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DbErr, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    data::encode_column,
    model::member::{
        CreateMemberParam, Member, PurchaseRecord, SyncProfileParam, UpdateMemberParam,
    },
};

/// Repository providing database operations for members.
pub struct MemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MemberRepository<'a, C> {
    /// Creates a new MemberRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a pending member with zero XP, no purchases and a fresh invite id.
    ///
    /// # Returns
    /// - `Ok(Member)` - The created member
    /// - `Err(DbErr)` - Database error, including a unique violation on `slack_id`
    pub async fn create(&self, param: CreateMemberParam) -> Result<Member, DbErr> {
        let entity = entity::member::ActiveModel {
            slack_id: ActiveValue::Set(param.slack_id),
            name: ActiveValue::Set(param.name),
            slack_name: ActiveValue::Set(param.slack_name),
            legal_name: ActiveValue::Set(param.legal_name),
            email: ActiveValue::Set(param.email),
            phone_number: ActiveValue::Set(None),
            birthday: ActiveValue::Set(None),
            experience_points: ActiveValue::Set(0),
            team_id: ActiveValue::Set(None),
            banned: ActiveValue::Set(false),
            ban_reason: ActiveValue::Set(None),
            pending: ActiveValue::Set(true),
            invite_id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            purchased_items: ActiveValue::Set("[]".to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Member::from_entity(entity))
    }

    pub async fn find_by_slack_id(&self, slack_id: &str) -> Result<Option<Member>, DbErr> {
        let entity = entity::prelude::Member::find()
            .filter(entity::member::Column::SlackId.eq(slack_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Member::from_entity))
    }

    pub async fn find_by_invite_id(&self, invite_id: &str) -> Result<Option<Member>, DbErr> {
        let entity = entity::prelude::Member::find()
            .filter(entity::member::Column::InviteId.eq(invite_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Member::from_entity))
    }

    /// Gets the members with any of the given slack ids, in no particular order.
    pub async fn find_by_slack_ids(&self, slack_ids: &[String]) -> Result<Vec<Member>, DbErr> {
        if slack_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Member::find()
            .filter(entity::member::Column::SlackId.is_in(slack_ids.iter().cloned()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Member::from_entity).collect())
    }

    /// Gets every member ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Member>, DbErr> {
        let entities = entity::prelude::Member::find()
            .order_by_asc(entity::member::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Member::from_entity).collect())
    }

    /// Searches members by substring over name, email, slack name and slack id.
    ///
    /// Matching uses SQL `LIKE`, which SQLite evaluates case-insensitively for ASCII.
    ///
    /// # Arguments
    /// - `query` - Non-empty search text
    /// - `limit` - Maximum number of results
    ///
    /// # Returns
    /// - `Ok(Vec<Member>)` - Matching members ordered by name
    /// - `Err(DbErr)` - Database error during query
    pub async fn search(&self, query: &str, limit: u64) -> Result<Vec<Member>, DbErr> {
        let entities = entity::prelude::Member::find()
            .filter(
                Condition::any()
                    .add(entity::member::Column::Name.contains(query))
                    .add(entity::member::Column::Email.contains(query))
                    .add(entity::member::Column::SlackName.contains(query))
                    .add(entity::member::Column::SlackId.contains(query)),
            )
            .order_by_asc(entity::member::Column::Name)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Member::from_entity).collect())
    }

    /// Writes the changed profile fields. Does nothing when there are no changes.
    pub async fn sync_profile(&self, id: i32, changes: SyncProfileParam) -> Result<(), DbErr> {
        if changes.is_empty() {
            return Ok(());
        }

        let mut active = entity::member::ActiveModel {
            id: ActiveValue::Unchanged(id),
            ..Default::default()
        };
        if let Some(name) = changes.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(slack_name) = changes.slack_name {
            active.slack_name = ActiveValue::Set(slack_name);
        }
        if let Some(legal_name) = changes.legal_name {
            active.legal_name = ActiveValue::Set(legal_name);
        }
        if let Some(email) = changes.email {
            active.email = ActiveValue::Set(email);
        }

        active.update(self.db).await?;
        Ok(())
    }

    /// Clears the pending flag and stores the contact details given at verification.
    ///
    /// # Returns
    /// - `Ok(true)` - Member updated
    /// - `Ok(false)` - No member with that slack id
    /// - `Err(DbErr)` - Database error during update
    pub async fn complete_registration(
        &self,
        slack_id: &str,
        phone_number: String,
        birthday: String,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Member::update_many()
            .col_expr(entity::member::Column::Pending, Expr::value(false))
            .col_expr(entity::member::Column::PhoneNumber, Expr::value(phone_number))
            .col_expr(entity::member::Column::Birthday, Expr::value(birthday))
            .filter(entity::member::Column::SlackId.eq(slack_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Sets or clears the member's team.
    pub async fn set_team(&self, slack_id: &str, team_id: Option<i32>) -> Result<(), DbErr> {
        entity::prelude::Member::update_many()
            .col_expr(entity::member::Column::TeamId, Expr::value(team_id))
            .filter(entity::member::Column::SlackId.eq(slack_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Applies admin edits to the member with the given invite id.
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - The updated member
    /// - `Ok(None)` - No member with that invite id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_admin(
        &self,
        invite_id: &str,
        param: UpdateMemberParam,
    ) -> Result<Option<Member>, DbErr> {
        let Some(entity) = entity::prelude::Member::find()
            .filter(entity::member::Column::InviteId.eq(invite_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(banned) = param.banned {
            active.banned = ActiveValue::Set(banned);
        }
        if let Some(ban_reason) = param.ban_reason {
            active.ban_reason = ActiveValue::Set(ban_reason);
        }
        if let Some(experience_points) = param.experience_points {
            active.experience_points = ActiveValue::Set(experience_points);
        }

        let entity = active.update(self.db).await?;
        Ok(Some(Member::from_entity(entity)))
    }

    /// Replaces the member's XP balance and purchase list if neither changed since `member`
    /// was read.
    ///
    /// The stored row is re-read and compared against `member`, then written with a filter on
    /// the exact stored values, so a concurrent write between read and update makes this a
    /// no-op instead of overwriting it.
    ///
    /// # Arguments
    /// - `member` - Member as read before the business checks
    /// - `experience_points` - New XP balance
    /// - `purchases` - New purchase list
    ///
    /// # Returns
    /// - `Ok(true)` - Written
    /// - `Ok(false)` - The member changed or disappeared concurrently
    /// - `Err(DbErr)` - Database error during read or update
    pub async fn replace_purchases(
        &self,
        member: &Member,
        experience_points: i32,
        purchases: &[PurchaseRecord],
    ) -> Result<bool, DbErr> {
        let Some(current) = entity::prelude::Member::find_by_id(member.id)
            .one(self.db)
            .await?
        else {
            return Ok(false);
        };

        let stored_xp = current.experience_points;
        let stored_purchases = current.purchased_items.clone();
        let unchanged = {
            let current = Member::from_entity(current);
            current.experience_points == member.experience_points
                && current.purchases == member.purchases
        };
        if !unchanged {
            return Ok(false);
        }

        let result = entity::prelude::Member::update_many()
            .col_expr(
                entity::member::Column::ExperiencePoints,
                Expr::value(experience_points),
            )
            .col_expr(
                entity::member::Column::PurchasedItems,
                Expr::value(encode_column(purchases, "purchased_items")?),
            )
            .filter(entity::member::Column::Id.eq(member.id))
            .filter(entity::member::Column::ExperiencePoints.eq(stored_xp))
            .filter(entity::member::Column::PurchasedItems.eq(stored_purchases))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}

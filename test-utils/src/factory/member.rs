//! Member factory for creating test member entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test members with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let member = MemberFactory::new(&db)
///     .slack_id("U0123")
///     .xp(100)
///     .build()
///     .await?;
/// ```
pub struct MemberFactory<'a> {
    db: &'a DatabaseConnection,
    slack_id: String,
    name: String,
    slack_name: String,
    email: String,
    experience_points: i32,
    team_id: Option<i32>,
    banned: bool,
    ban_reason: Option<String>,
    pending: bool,
    purchased_items: String,
}

impl<'a> MemberFactory<'a> {
    /// Creates a new MemberFactory with default values.
    ///
    /// Defaults:
    /// - slack_id: `"U{id}"`
    /// - name: `"Member {id}"`
    /// - email: `"member{id}@example.com"`
    /// - experience_points: `0`
    /// - pending: `false`
    /// - purchased_items: `"[]"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            slack_id: format!("U{}", id),
            name: format!("Member {}", id),
            slack_name: format!("member{}", id),
            email: format!("member{}@example.com", id),
            experience_points: 0,
            team_id: None,
            banned: false,
            ban_reason: None,
            pending: false,
            purchased_items: "[]".to_string(),
        }
    }

    pub fn slack_id(mut self, slack_id: impl Into<String>) -> Self {
        self.slack_id = slack_id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the member's XP balance.
    pub fn xp(mut self, experience_points: i32) -> Self {
        self.experience_points = experience_points;
        self
    }

    pub fn team_id(mut self, team_id: Option<i32>) -> Self {
        self.team_id = team_id;
        self
    }

    /// Marks the member as banned with the given reason.
    pub fn banned(mut self, reason: Option<&str>) -> Self {
        self.banned = true;
        self.ban_reason = reason.map(str::to_string);
        self
    }

    pub fn pending(mut self, pending: bool) -> Self {
        self.pending = pending;
        self
    }

    /// Sets the raw JSON stored in the purchase list column.
    pub fn purchased_items(mut self, raw: impl Into<String>) -> Self {
        self.purchased_items = raw.into();
        self
    }

    /// Builds and inserts the member entity into the database.
    pub async fn build(self) -> Result<entity::member::Model, DbErr> {
        entity::member::ActiveModel {
            slack_id: ActiveValue::Set(self.slack_id),
            name: ActiveValue::Set(self.name.clone()),
            slack_name: ActiveValue::Set(self.slack_name),
            legal_name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            phone_number: ActiveValue::Set(None),
            birthday: ActiveValue::Set(None),
            experience_points: ActiveValue::Set(self.experience_points),
            team_id: ActiveValue::Set(self.team_id),
            banned: ActiveValue::Set(self.banned),
            ban_reason: ActiveValue::Set(self.ban_reason),
            pending: ActiveValue::Set(self.pending),
            invite_id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            purchased_items: ActiveValue::Set(self.purchased_items),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a member with default values.
///
/// Shorthand for `MemberFactory::new(db).build().await`.
pub async fn create_member(db: &DatabaseConnection) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db).build().await
}

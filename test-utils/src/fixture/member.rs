//! Member fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::member;

pub const DEFAULT_SLACK_ID: &str = "U0000001";
pub const DEFAULT_NAME: &str = "Test Member";
pub const DEFAULT_INVITE_ID: &str = "00000000-0000-4000-8000-000000000001";

/// Creates a member entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - slack_id: `"U0000001"`
/// - experience_points: `0`
/// - pending: `false`, banned: `false`
/// - purchased_items: `"[]"`
pub fn entity() -> member::Model {
    member::Model {
        id: 1,
        slack_id: DEFAULT_SLACK_ID.to_string(),
        name: DEFAULT_NAME.to_string(),
        slack_name: "testmember".to_string(),
        legal_name: DEFAULT_NAME.to_string(),
        email: "test@example.com".to_string(),
        phone_number: None,
        birthday: None,
        experience_points: 0,
        team_id: None,
        banned: false,
        ban_reason: None,
        pending: false,
        invite_id: DEFAULT_INVITE_ID.to_string(),
        purchased_items: "[]".to_string(),
        created_at: Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).single().unwrap_or_default(),
    }
}

/// Creates a builder for customizing a member fixture.
pub fn entity_builder() -> MemberEntityBuilder {
    MemberEntityBuilder { entity: entity() }
}

pub struct MemberEntityBuilder {
    entity: member::Model,
}

impl MemberEntityBuilder {
    pub fn slack_id(mut self, slack_id: impl Into<String>) -> Self {
        self.entity.slack_id = slack_id.into();
        self
    }

    pub fn xp(mut self, experience_points: i32) -> Self {
        self.entity.experience_points = experience_points;
        self
    }

    pub fn team_id(mut self, team_id: Option<i32>) -> Self {
        self.entity.team_id = team_id;
        self
    }

    /// Sets the raw purchase list column, e.g. a double-encoded legacy value.
    pub fn purchased_items(mut self, raw: impl Into<String>) -> Self {
        self.entity.purchased_items = raw.into();
        self
    }

    pub fn banned(mut self, reason: Option<&str>) -> Self {
        self.entity.banned = true;
        self.entity.ban_reason = reason.map(str::to_string);
        self
    }

    pub fn build(self) -> member::Model {
        self.entity
    }
}

//! Team factory for creating test team entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::{json, Value};

/// Factory for creating test teams.
///
/// Adding a member with `member()` only writes the team's member list; use
/// `helpers::create_member_on_team` when the member's `team_id` must match.
pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    team_type: String,
    members: Vec<Value>,
    projects: Vec<String>,
}

impl<'a> TeamFactory<'a> {
    /// Creates a new TeamFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Team {id}"`
    /// - team_type: `"Public"`
    /// - no members, projects or join requests
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Team {}", id),
            team_type: "Public".to_string(),
            members: Vec::new(),
            projects: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the team type (`"Public"`, `"Private"` or `"Ask for invite"`).
    pub fn team_type(mut self, team_type: impl Into<String>) -> Self {
        self.team_type = team_type.into();
        self
    }

    /// Appends a member entry built from the member entity.
    pub fn member(mut self, member: &entity::member::Model) -> Self {
        self.members.push(json!({
            "id": member.slack_id,
            "name": member.name,
            "slackName": member.slack_name,
        }));
        self
    }

    pub fn project(mut self, name: impl Into<String>) -> Self {
        self.projects.push(name.into());
        self
    }

    /// Builds and inserts the team entity into the database.
    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        let now = Utc::now();
        entity::team::ActiveModel {
            name: ActiveValue::Set(self.name),
            team_type: ActiveValue::Set(self.team_type),
            members: ActiveValue::Set(Value::Array(self.members).to_string()),
            projects: ActiveValue::Set(json!(self.projects).to_string()),
            join_requests: ActiveValue::Set("[]".to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an empty public team.
pub async fn create_team(db: &DatabaseConnection) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db).build().await
}

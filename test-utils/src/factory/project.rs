//! Project factory for creating test project entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test projects owned by a team.
pub struct ProjectFactory<'a> {
    db: &'a DatabaseConnection,
    team_id: i32,
    name: String,
    description: String,
    status: String,
}

impl<'a> ProjectFactory<'a> {
    /// Creates a new ProjectFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Project {id}"`
    /// - status: `"Created"`
    pub fn new(db: &'a DatabaseConnection, team_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            team_id,
            name: format!("Project {}", id),
            description: "A test project".to_string(),
            status: "Created".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the status string (`"Created"`, `"In development"`, `"Approved"`, `"Rejected"`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::project::Model, DbErr> {
        let now = Utc::now();
        entity::project::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            status: ActiveValue::Set(self.status),
            team_id: ActiveValue::Set(self.team_id),
            git_repo: ActiveValue::Set(String::new()),
            date_submitted: ActiveValue::Set(now),
            devlogs: ActiveValue::Set("[]".to_string()),
            hackatime_projects: ActiveValue::Set("[]".to_string()),
            hackatime_hours: ActiveValue::Set(0.0),
            rejection_reason: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a project with default values for the given team.
pub async fn create_project(
    db: &DatabaseConnection,
    team_id: i32,
) -> Result<entity::project::Model, DbErr> {
    ProjectFactory::new(db, team_id).build().await
}

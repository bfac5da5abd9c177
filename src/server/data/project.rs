use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::encode_column,
    model::project::{CreateProjectParam, Project, ProjectStatus, UpdateProjectParam},
};

/// Repository providing database operations for projects.
pub struct ProjectRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProjectRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a project in the `Created` state with no devlogs or linked Hackatime projects.
    pub async fn create(&self, param: CreateProjectParam) -> Result<Project, DbErr> {
        let now = Utc::now();
        let entity = entity::project::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            status: ActiveValue::Set(ProjectStatus::Created.to_string()),
            team_id: ActiveValue::Set(param.team_id),
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
        .await?;

        Ok(Project::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Project>, DbErr> {
        let entity = entity::prelude::Project::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Project::from_entity))
    }

    /// Gets every project, newest submission first.
    pub async fn get_all(&self) -> Result<Vec<Project>, DbErr> {
        let entities = entity::prelude::Project::find()
            .order_by_desc(entity::project::Column::DateSubmitted)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Project::from_entity).collect())
    }

    pub async fn get_by_status(&self, status: ProjectStatus) -> Result<Vec<Project>, DbErr> {
        let entities = entity::prelude::Project::find()
            .filter(entity::project::Column::Status.eq(status.to_string()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Project::from_entity).collect())
    }

    /// Checks whether the team already has a project with this exact name.
    pub async fn exists_in_team(&self, team_id: i32, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Project::find()
            .filter(entity::project::Column::TeamId.eq(team_id))
            .filter(entity::project::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Applies the given column changes and bumps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(Project))` - The updated project
    /// - `Ok(None)` - No project with that id
    /// - `Err(DbErr)` - Database error during read or update
    pub async fn update(
        &self,
        id: i32,
        param: UpdateProjectParam,
    ) -> Result<Option<Project>, DbErr> {
        let Some(entity) = entity::prelude::Project::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(description) = param.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(git_repo) = param.git_repo {
            active.git_repo = ActiveValue::Set(git_repo);
        }
        if let Some(status) = param.status {
            active.status = ActiveValue::Set(status.to_string());
        }
        if let Some(rejection_reason) = param.rejection_reason {
            active.rejection_reason = ActiveValue::Set(rejection_reason);
        }
        if let Some(devlogs) = param.devlogs {
            active.devlogs = ActiveValue::Set(encode_column(&devlogs, "devlogs")?);
        }
        if let Some(links) = param.hackatime_projects {
            active.hackatime_projects =
                ActiveValue::Set(encode_column(&links, "hackatime_projects")?);
        }
        if let Some(hours) = param.hackatime_hours {
            active.hackatime_hours = ActiveValue::Set(hours);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;
        Ok(Some(Project::from_entity(entity)))
    }
}

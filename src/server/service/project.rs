//! Project submission, devlogs and Hackatime links.
//!
//! Only members of the owning team may read a single project or change it. Posting a devlog
//! or linking a Hackatime project counts as activity and moves a `Created` project into
//! development.

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};
use std::collections::HashMap;

use crate::{
    model::project::{
        CreateDevlogDto, CreateProjectDto, HackatimeRequestDto, ProjectDto, ProjectStatusDto,
        UpdateProjectDto,
    },
    server::{
        data::{project::ProjectRepository, team::TeamRepository},
        error::AppError,
        model::{
            member::Member,
            project::{
                CreateProjectParam, Devlog, HackatimeLink, Project, ProjectStatus,
                UpdateProjectParam,
            },
            team::Team,
        },
        service::hackatime::HackatimeService,
    },
};

pub struct ProjectService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Every project, newest first, with team and member names.
    pub async fn get_all(&self) -> Result<Vec<ProjectDto>, AppError> {
        let projects = ProjectRepository::new(self.db).get_all().await?;
        self.into_dtos(projects).await
    }

    /// Converts projects to DTOs, resolving each owning team once.
    pub async fn into_dtos(&self, projects: Vec<Project>) -> Result<Vec<ProjectDto>, AppError> {
        let teams: HashMap<i32, Team> = TeamRepository::new(self.db)
            .get_all()
            .await?
            .into_iter()
            .map(|team| (team.id, team))
            .collect();

        Ok(projects
            .into_iter()
            .map(|project| {
                let (team_name, member_names) = team_names(teams.get(&project.team_id));
                project.into_dto(team_name, member_names)
            })
            .collect())
    }

    /// Creates a project for the member's team.
    ///
    /// # Returns
    /// - `Ok(ProjectDto)` - The new project in the `Created` state
    /// - `Err(AppError::BadRequest)` - Missing name, member not on a team, or the team
    ///   already has a project with that name
    /// - `Err(AppError::NotFound)` - The member's team no longer exists
    pub async fn create(&self, member: &Member, dto: CreateProjectDto) -> Result<ProjectDto, AppError> {
        let Some(name) = dto
            .project_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
        else {
            return Err(AppError::BadRequest("Project name is required".to_string()));
        };
        let Some(team_id) = member.team_id else {
            return Err(AppError::BadRequest(
                "You must be on a team to create a project".to_string(),
            ));
        };

        let txn = self.db.begin().await?;
        let project_repo = ProjectRepository::new(&txn);
        let team_repo = TeamRepository::new(&txn);

        let mut team = team_repo
            .find_by_id(team_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;
        if project_repo.exists_in_team(team_id, &name).await? {
            return Err(AppError::BadRequest(
                "A project with this name already exists for your team".to_string(),
            ));
        }

        let project = project_repo
            .create(CreateProjectParam {
                name: name.clone(),
                description: dto.description.unwrap_or_default().trim().to_string(),
                team_id,
            })
            .await?;
        team.projects.push(name);
        team_repo.update_projects(team.id, &team.projects).await?;

        txn.commit().await?;

        tracing::info!(project_id = project.id, team_id, "Created project");

        let (team_name, member_names) = team_names(Some(&team));
        Ok(project.into_dto(team_name, member_names))
    }

    pub async fn get(&self, member: &Member, id: i32) -> Result<ProjectDto, AppError> {
        let project = self.find_for_member(member, id).await?;
        self.to_dto(project).await
    }

    /// Updates the description and git repository of a project.
    pub async fn update(
        &self,
        member: &Member,
        id: i32,
        dto: UpdateProjectDto,
    ) -> Result<ProjectDto, AppError> {
        self.find_for_member(member, id).await?;

        let param = UpdateProjectParam {
            description: dto.description.map(|d| d.trim().to_string()),
            git_repo: dto.git_repo.map(|r| r.trim().to_string()),
            ..Default::default()
        };

        self.apply(id, param).await
    }

    /// Appends a devlog authored by the member.
    ///
    /// # Returns
    /// - `Ok(ProjectDto)` - The project with the new devlog
    /// - `Err(AppError::BadRequest)` - Blank content
    /// - `Err(AppError::NotFound)` - No project with that id
    /// - `Err(AppError::Forbidden)` - The member is not on the owning team
    pub async fn add_devlog(
        &self,
        member: &Member,
        id: i32,
        dto: CreateDevlogDto,
    ) -> Result<ProjectDto, AppError> {
        let Some(content) = dto
            .content
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
        else {
            return Err(AppError::BadRequest("Devlog content is required".to_string()));
        };

        let project = self.find_for_member(member, id).await?;

        let mut devlogs = project.devlogs.clone();
        devlogs.push(Devlog {
            id: uuid::Uuid::new_v4().to_string(),
            content,
            image_url: dto
                .image_url
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty()),
            timestamp: Utc::now(),
            author: member.name.clone(),
        });

        let param = UpdateProjectParam {
            status: Some(project.status_after_activity()),
            devlogs: Some(devlogs),
            ..Default::default()
        };

        self.apply(id, param).await
    }

    /// Links one of the member's Hackatime projects and recomputes tracked hours.
    ///
    /// # Returns
    /// - `Ok(ProjectDto)` - The project with the new link and hours
    /// - `Err(AppError::BadRequest)` - Blank name or the member already linked it
    /// - `Err(AppError::NotFound)` / `Err(AppError::Forbidden)` - As for `get`
    pub async fn link_hackatime(
        &self,
        member: &Member,
        id: i32,
        dto: HackatimeRequestDto,
        hackatime: &HackatimeService<'_>,
    ) -> Result<ProjectDto, AppError> {
        let project_name = required_project_name(dto.project_name)?;
        let project = self.find_for_member(member, id).await?;

        let already_linked = project
            .hackatime_projects
            .iter()
            .any(|link| link.project_name == project_name && link.user_id == member.slack_id);
        if already_linked {
            return Err(AppError::BadRequest(
                "This Hackatime project is already linked".to_string(),
            ));
        }

        let mut links = project.hackatime_projects.clone();
        links.push(HackatimeLink {
            project_name,
            user_id: member.slack_id.clone(),
            user_name: member.name.clone(),
            user_slack_name: member.slack_name.clone(),
        });
        let hours = hackatime.total_hours(&links).await;

        let param = UpdateProjectParam {
            status: Some(project.status_after_activity()),
            hackatime_projects: Some(links),
            hackatime_hours: Some(hours),
            ..Default::default()
        };

        self.apply(id, param).await
    }

    /// Removes a Hackatime link and recomputes tracked hours.
    ///
    /// The link is matched by project name and the linking member, which defaults to the
    /// caller. Unlinking a project that is not linked succeeds and still refreshes the hours.
    pub async fn unlink_hackatime(
        &self,
        member: &Member,
        id: i32,
        dto: HackatimeRequestDto,
        hackatime: &HackatimeService<'_>,
    ) -> Result<ProjectDto, AppError> {
        let project_name = required_project_name(dto.project_name)?;
        let user_id = dto.user_id.unwrap_or_else(|| member.slack_id.clone());
        let project = self.find_for_member(member, id).await?;

        let mut links = project.hackatime_projects.clone();
        links.retain(|link| !(link.project_name == project_name && link.user_id == user_id));
        let hours = hackatime.total_hours(&links).await;

        let param = UpdateProjectParam {
            hackatime_projects: Some(links),
            hackatime_hours: Some(hours),
            ..Default::default()
        };

        self.apply(id, param).await
    }

    /// Sets the review status. A rejection reason is kept only for rejected projects.
    pub async fn set_status(&self, id: i32, dto: ProjectStatusDto) -> Result<ProjectDto, AppError> {
        let status: ProjectStatus = dto.status.parse().map_err(AppError::BadRequest)?;
        let rejection_reason = match status {
            ProjectStatus::Rejected => dto
                .rejection_reason
                .map(|reason| reason.trim().to_string())
                .filter(|reason| !reason.is_empty()),
            _ => None,
        };

        let param = UpdateProjectParam {
            status: Some(status),
            rejection_reason: Some(rejection_reason),
            ..Default::default()
        };

        let project = self.apply(id, param).await?;
        tracing::info!(project_id = id, status = %status, "Project status changed");

        Ok(project)
    }

    /// Loads a project the member's team owns.
    async fn find_for_member(&self, member: &Member, id: i32) -> Result<Project, AppError> {
        let project = ProjectRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

        if member.team_id != Some(project.team_id) {
            return Err(AppError::Forbidden("Access denied".to_string()));
        }

        Ok(project)
    }

    async fn apply(&self, id: i32, param: UpdateProjectParam) -> Result<ProjectDto, AppError> {
        let project = ProjectRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

        self.to_dto(project).await
    }

    async fn to_dto(&self, project: Project) -> Result<ProjectDto, AppError> {
        let team = TeamRepository::new(self.db)
            .find_by_id(project.team_id)
            .await?;
        let (team_name, member_names) = team_names(team.as_ref());

        Ok(project.into_dto(team_name, member_names))
    }
}

fn team_names(team: Option<&Team>) -> (String, Vec<String>) {
    match team {
        Some(team) => (
            team.name.clone(),
            team.members.iter().map(|m| m.name.clone()).collect(),
        ),
        None => (String::new(), Vec::new()),
    }
}

fn required_project_name(name: Option<String>) -> Result<String, AppError> {
    name.map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::BadRequest("Project name is required".to_string()))
}

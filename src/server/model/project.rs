//! Project domain models and parameters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{
    model::project::{DevlogDto, HackatimeLinkDto, ProjectDto},
    server::util::json::decode_list,
};

/// Review state of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Created,
    InDevelopment,
    Approved,
    Rejected,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "Created",
            Self::InDevelopment => "In development",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Created" => Ok(Self::Created),
            "In development" => Ok(Self::InDevelopment),
            "Approved" => Ok(Self::Approved),
            "Rejected" => Ok(Self::Rejected),
            other => Err(format!("Invalid project status '{}'", other)),
        }
    }
}

/// Progress note posted by a team member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Devlog {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub timestamp: DateTime<Utc>,
    /// Display name of the author.
    pub author: String,
}

impl Devlog {
    pub fn into_dto(self) -> DevlogDto {
        DevlogDto {
            id: self.id,
            content: self.content,
            image_url: self.image_url,
            timestamp: self.timestamp,
            author: self.author,
        }
    }
}

/// A Hackatime project linked by one team member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HackatimeLink {
    pub project_name: String,
    /// Slack id of the member who linked it.
    pub user_id: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_slack_name: String,
}

impl HackatimeLink {
    pub fn into_dto(self) -> HackatimeLinkDto {
        HackatimeLinkDto {
            project_name: self.project_name,
            user_id: self.user_id,
            user_name: self.user_name,
            user_slack_name: self.user_slack_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub team_id: i32,
    pub git_repo: String,
    pub date_submitted: DateTime<Utc>,
    pub devlogs: Vec<Devlog>,
    pub hackatime_projects: Vec<HackatimeLink>,
    pub hackatime_hours: f64,
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Converts an entity model to a project domain model at the repository boundary.
    ///
    /// An unrecognized stored status is read as `Created` with a warning.
    pub fn from_entity(entity: entity::project::Model) -> Self {
        let status = entity.status.parse().unwrap_or_else(|err| {
            tracing::warn!(project_id = entity.id, "{}; treating as Created", err);
            ProjectStatus::Created
        });

        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            status,
            team_id: entity.team_id,
            git_repo: entity.git_repo,
            date_submitted: entity.date_submitted,
            devlogs: decode_list(&entity.devlogs, "devlogs"),
            hackatime_projects: decode_list(&entity.hackatime_projects, "hackatime_projects"),
            hackatime_hours: entity.hackatime_hours,
            rejection_reason: entity.rejection_reason,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts to a DTO with the owning team's name and member names resolved.
    pub fn into_dto(self, team_name: String, member_names: Vec<String>) -> ProjectDto {
        ProjectDto {
            id: self.id,
            name: self.name,
            description: self.description,
            status: self.status.to_string(),
            team_id: self.team_id,
            team_name,
            member_names,
            git_repo: self.git_repo,
            date_submitted: self.date_submitted,
            devlogs: self.devlogs.into_iter().map(Devlog::into_dto).collect(),
            hackatime_projects: self
                .hackatime_projects
                .into_iter()
                .map(HackatimeLink::into_dto)
                .collect(),
            hackatime_hours: self.hackatime_hours,
            rejection_reason: self.rejection_reason,
        }
    }

    /// Status after the team shows activity: a fresh project moves into development.
    pub fn status_after_activity(&self) -> ProjectStatus {
        match self.status {
            ProjectStatus::Created => ProjectStatus::InDevelopment,
            other => other,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateProjectParam {
    pub name: String,
    pub description: String,
    pub team_id: i32,
}

/// Column changes applied to a project. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateProjectParam {
    pub description: Option<String>,
    pub git_repo: Option<String>,
    pub status: Option<ProjectStatus>,
    pub rejection_reason: Option<Option<String>>,
    pub devlogs: Option<Vec<Devlog>>,
    pub hackatime_projects: Option<Vec<HackatimeLink>>,
    pub hackatime_hours: Option<f64>,
}

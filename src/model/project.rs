use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DevlogDto {
    pub id: String,
    pub content: String,
    pub image_url: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub author: String,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HackatimeLinkDto {
    pub project_name: String,
    pub user_id: String,
    pub user_name: String,
    pub user_slack_name: String,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// `"Created"`, `"In development"`, `"Approved"` or `"Rejected"`.
    pub status: String,
    pub team_id: i32,
    pub team_name: String,
    pub member_names: Vec<String>,
    pub git_repo: String,
    pub date_submitted: DateTime<Utc>,
    pub devlogs: Vec<DevlogDto>,
    pub hackatime_projects: Vec<HackatimeLinkDto>,
    pub hackatime_hours: f64,
    pub rejection_reason: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectDto {
    pub project_name: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectDto {
    pub description: Option<String>,
    pub git_repo: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDevlogDto {
    pub content: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HackatimeRequestDto {
    pub project_name: Option<String>,
    /// Slack id of the member who linked the project; defaults to the caller on unlink.
    pub user_id: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStatusDto {
    pub status: String,
    pub rejection_reason: Option<String>,
}

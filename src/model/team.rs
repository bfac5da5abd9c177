use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberDto {
    /// Slack id of the member.
    pub id: String,
    pub name: String,
    pub slack_name: String,
    /// Current XP, filled in on listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xp: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequestDto {
    pub id: String,
    pub name: String,
    pub slack_name: String,
    pub request_date: DateTime<Utc>,
    pub status: String,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamDto {
    pub id: i32,
    pub name: String,
    /// `"Public"`, `"Private"` or `"Ask for invite"`.
    pub team_type: String,
    pub members: Vec<TeamMemberDto>,
    pub projects: Vec<String>,
    pub join_requests: Vec<JoinRequestDto>,
    pub team_size: usize,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamDto {
    pub team_name: Option<String>,
    pub team_type: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamIdDto {
    pub team_id: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct TeamResponseDto {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<TeamDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct TeamListDto {
    pub teams: Vec<TeamDto>,
}

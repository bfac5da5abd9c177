use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardUserDto {
    pub rank: usize,
    pub id: String,
    pub name: String,
    pub slack_name: String,
    pub xp: i32,
    pub team_id: Option<i32>,
    /// Name of the member's team, or "No Team Assigned".
    pub team_name: String,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct LeaderboardTeamDto {
    pub rank: usize,
    pub id: i32,
    pub name: String,
    #[serde(rename = "totalXP")]
    pub total_xp: i64,
    #[serde(rename = "memberCount")]
    pub member_count: usize,
    #[serde(rename = "averageXP")]
    pub average_xp: i64,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LeaderboardDto {
    pub users: Vec<LeaderboardUserDto>,
    pub teams: Vec<LeaderboardTeamDto>,
}

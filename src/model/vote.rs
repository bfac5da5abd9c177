use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::project::ProjectDto;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct VotingPairDto {
    pub projects: Vec<ProjectDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CastVoteDto {
    pub projects_shown: Option<Vec<i32>>,
    pub project_chosen: Option<i32>,
    pub reason: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VoteTallyDto {
    pub project_id: i32,
    pub project_name: String,
    pub votes: usize,
}

use chrono::{DateTime, Utc};

use crate::{
    model::vote::CastVoteDto,
    server::{error::AppError, util::json::decode_list},
};

/// One recorded choice between the projects a voter was shown.
#[derive(Debug, Clone, PartialEq)]
pub struct Vote {
    pub id: i32,
    pub voter_slack_id: String,
    pub projects_shown: Vec<i32>,
    pub project_chosen: i32,
    pub reason: String,
    pub voted_at: DateTime<Utc>,
}

impl Vote {
    pub fn from_entity(entity: entity::vote::Model) -> Self {
        Self {
            id: entity.id,
            voter_slack_id: entity.voter_slack_id,
            projects_shown: decode_list(&entity.projects_shown, "projects_shown"),
            project_chosen: entity.project_chosen,
            reason: entity.reason,
            voted_at: entity.voted_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CastVoteParam {
    pub voter_slack_id: String,
    pub projects_shown: Vec<i32>,
    pub project_chosen: i32,
    pub reason: String,
}

impl CastVoteParam {
    /// Validates a ballot.
    ///
    /// # Returns
    /// - `Ok(CastVoteParam)` - Complete ballot whose choice was among the shown projects
    /// - `Err(AppError::BadRequest)` - A field is missing or blank, or the chosen project
    ///   was not shown
    pub fn from_dto(voter_slack_id: String, dto: CastVoteDto) -> Result<Self, AppError> {
        let reason = dto.reason.map(|r| r.trim().to_string()).unwrap_or_default();
        let (Some(projects_shown), Some(project_chosen)) = (dto.projects_shown, dto.project_chosen)
        else {
            return Err(AppError::BadRequest("Missing required fields".to_string()));
        };
        if projects_shown.is_empty() || reason.is_empty() {
            return Err(AppError::BadRequest("Missing required fields".to_string()));
        }
        if !projects_shown.contains(&project_chosen) {
            return Err(AppError::BadRequest(
                "Chosen project was not one of the projects shown".to_string(),
            ));
        }

        Ok(Self {
            voter_slack_id,
            projects_shown,
            project_chosen,
            reason,
        })
    }
}

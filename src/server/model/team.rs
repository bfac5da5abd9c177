//! Team domain models and parameters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt, str::FromStr};

use crate::{
    model::team::{JoinRequestDto, TeamDto, TeamMemberDto},
    server::{model::member::Member, util::json::decode_list},
};

/// How other members may join a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamType {
    /// Anyone may join.
    Public,
    /// Nobody may join directly.
    Private,
    /// Members send join requests; direct joins are still accepted.
    AskForInvite,
}

impl TeamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "Public",
            Self::Private => "Private",
            Self::AskForInvite => "Ask for invite",
        }
    }
}

impl fmt::Display for TeamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TeamType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Public" => Ok(Self::Public),
            "Private" => Ok(Self::Private),
            "Ask for invite" => Ok(Self::AskForInvite),
            other => Err(format!("Invalid team type '{}'", other)),
        }
    }
}

/// Member entry stored on a team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    /// Slack id of the member.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slack_name: String,
}

impl TeamMember {
    pub fn from_member(member: &Member) -> Self {
        Self {
            id: member.slack_id.clone(),
            name: member.name.clone(),
            slack_name: member.slack_name.clone(),
        }
    }
}

/// Request from a member to join an invite-only team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slack_name: String,
    pub request_date: DateTime<Utc>,
    pub status: String,
}

impl JoinRequest {
    pub fn pending_for(member: &Member) -> Self {
        Self {
            id: member.slack_id.clone(),
            name: member.name.clone(),
            slack_name: member.slack_name.clone(),
            request_date: Utc::now(),
            status: "pending".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: i32,
    pub name: String,
    pub team_type: TeamType,
    pub members: Vec<TeamMember>,
    pub projects: Vec<String>,
    pub join_requests: Vec<JoinRequest>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Team {
    /// Converts an entity model to a team domain model at the repository boundary.
    ///
    /// An unrecognized stored type is read as `Public` with a warning.
    pub fn from_entity(entity: entity::team::Model) -> Self {
        let team_type = entity.team_type.parse().unwrap_or_else(|err| {
            tracing::warn!(team_id = entity.id, "{}; treating as Public", err);
            TeamType::Public
        });

        Self {
            id: entity.id,
            name: entity.name,
            team_type,
            members: decode_list(&entity.members, "members"),
            projects: decode_list(&entity.projects, "projects"),
            join_requests: decode_list(&entity.join_requests, "join_requests"),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn has_member(&self, slack_id: &str) -> bool {
        self.members.iter().any(|m| m.id == slack_id)
    }

    pub fn has_request_from(&self, slack_id: &str) -> bool {
        self.join_requests.iter().any(|r| r.id == slack_id)
    }

    /// Converts to a DTO, filling member XP from the lookup where known.
    pub fn into_dto(self, xp_by_slack_id: &HashMap<String, i32>) -> TeamDto {
        let team_size = self.members.len();
        TeamDto {
            id: self.id,
            name: self.name,
            team_type: self.team_type.to_string(),
            members: self
                .members
                .into_iter()
                .map(|m| TeamMemberDto {
                    xp: xp_by_slack_id.get(&m.id).copied(),
                    id: m.id,
                    name: m.name,
                    slack_name: m.slack_name,
                })
                .collect(),
            projects: self.projects,
            join_requests: self
                .join_requests
                .into_iter()
                .map(|r| JoinRequestDto {
                    id: r.id,
                    name: r.name,
                    slack_name: r.slack_name,
                    request_date: r.request_date,
                    status: r.status,
                })
                .collect(),
            team_size,
        }
    }
}

/// Parameters for creating a team with its founding member.
#[derive(Debug, Clone)]
pub struct CreateTeamParam {
    pub name: String,
    pub team_type: TeamType,
    pub founder: TeamMember,
}

//! Team formation rules.
//!
//! Membership is stored on both sides: the member's `team_id` and the team's member list.
//! Every operation that changes membership writes both inside one transaction.

use sea_orm::{DatabaseConnection, TransactionTrait};
use std::collections::HashMap;

use crate::{
    model::team::{CreateTeamDto, TeamDto},
    server::{
        data::{member::MemberRepository, team::TeamRepository},
        error::AppError,
        model::{
            member::Member,
            team::{CreateTeamParam, JoinRequest, Team, TeamMember, TeamType},
        },
    },
};

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Every team with each member's current XP filled in.
    pub async fn get_all(&self) -> Result<Vec<TeamDto>, AppError> {
        let teams = TeamRepository::new(self.db).get_all().await?;

        let slack_ids: Vec<String> = teams
            .iter()
            .flat_map(|team| team.members.iter().map(|m| m.id.clone()))
            .collect();
        let xp_by_slack_id: HashMap<String, i32> = MemberRepository::new(self.db)
            .find_by_slack_ids(&slack_ids)
            .await?
            .into_iter()
            .map(|member| (member.slack_id, member.experience_points))
            .collect();

        Ok(teams
            .into_iter()
            .map(|team| team.into_dto(&xp_by_slack_id))
            .collect())
    }

    /// Creates a team with the member as its only member.
    ///
    /// # Returns
    /// - `Ok(Team)` - The new team
    /// - `Err(AppError::BadRequest)` - Missing name or type, unknown type, or the member is
    ///   already on a team
    pub async fn create(&self, member: &Member, dto: CreateTeamDto) -> Result<Team, AppError> {
        let (Some(name), Some(team_type)) = (
            dto.team_name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()),
            dto.team_type.filter(|t| !t.trim().is_empty()),
        ) else {
            return Err(AppError::BadRequest(
                "Team name and type are required".to_string(),
            ));
        };
        let team_type: TeamType = team_type
            .parse()
            .map_err(|_| AppError::BadRequest("Invalid team type".to_string()))?;

        let txn = self.db.begin().await?;
        let member = current(&MemberRepository::new(&txn), &member.slack_id).await?;
        if member.team_id.is_some() {
            return Err(AppError::BadRequest("User is already on a team".to_string()));
        }

        let team = TeamRepository::new(&txn)
            .create(CreateTeamParam {
                name,
                team_type,
                founder: TeamMember::from_member(&member),
            })
            .await?;
        MemberRepository::new(&txn)
            .set_team(&member.slack_id, Some(team.id))
            .await?;

        txn.commit().await?;

        tracing::info!(team_id = team.id, slack_id = %member.slack_id, "Created team");

        Ok(team)
    }

    /// Adds the member to a team that is not private.
    ///
    /// # Returns
    /// - `Ok(())` - Joined
    /// - `Err(AppError::BadRequest)` - Missing team id or the member is already on a team
    /// - `Err(AppError::NotFound)` - No team with that id
    /// - `Err(AppError::Forbidden)` - The team is private
    pub async fn join(&self, member: &Member, team_id: Option<i32>) -> Result<(), AppError> {
        let team_id = required_team_id(team_id)?;

        let txn = self.db.begin().await?;
        let member_repo = MemberRepository::new(&txn);
        let team_repo = TeamRepository::new(&txn);

        let member = current(&member_repo, &member.slack_id).await?;
        if member.team_id.is_some() {
            return Err(AppError::BadRequest("User is already on a team".to_string()));
        }
        let mut team = find_team(&team_repo, team_id).await?;
        if team.team_type == TeamType::Private {
            return Err(AppError::Forbidden("Cannot join private team".to_string()));
        }

        if !team.has_member(&member.slack_id) {
            team.members.push(TeamMember::from_member(&member));
            team_repo.update_members(team.id, &team.members).await?;
        }
        if team.has_request_from(&member.slack_id) {
            team.join_requests.retain(|request| request.id != member.slack_id);
            team_repo
                .update_join_requests(team.id, &team.join_requests)
                .await?;
        }
        member_repo.set_team(&member.slack_id, Some(team.id)).await?;

        txn.commit().await?;

        tracing::info!(team_id = team.id, slack_id = %member.slack_id, "Member joined team");

        Ok(())
    }

    /// Records a pending join request on an invite-only team.
    ///
    /// # Returns
    /// - `Ok(())` - Request recorded
    /// - `Err(AppError::BadRequest)` - Missing team id, member already on a team, team does
    ///   not take requests, or a request was already sent
    /// - `Err(AppError::NotFound)` - No team with that id
    pub async fn request(&self, member: &Member, team_id: Option<i32>) -> Result<(), AppError> {
        let team_id = required_team_id(team_id)?;

        let txn = self.db.begin().await?;
        let team_repo = TeamRepository::new(&txn);

        let member = current(&MemberRepository::new(&txn), &member.slack_id).await?;
        if member.team_id.is_some() {
            return Err(AppError::BadRequest("User is already on a team".to_string()));
        }
        let mut team = find_team(&team_repo, team_id).await?;
        if team.team_type != TeamType::AskForInvite {
            return Err(AppError::BadRequest(
                "This team does not accept join requests".to_string(),
            ));
        }
        if team.has_request_from(&member.slack_id) {
            return Err(AppError::BadRequest("Join request already sent".to_string()));
        }

        team.join_requests.push(JoinRequest::pending_for(&member));
        team_repo
            .update_join_requests(team.id, &team.join_requests)
            .await?;

        txn.commit().await?;

        Ok(())
    }

    /// Removes the member from their team, deleting the team once it is empty.
    ///
    /// # Returns
    /// - `Ok(())` - Left the team
    /// - `Err(AppError::BadRequest)` - The member is not on a team
    pub async fn leave(&self, member: &Member) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let member_repo = MemberRepository::new(&txn);
        let team_repo = TeamRepository::new(&txn);

        let member = current(&member_repo, &member.slack_id).await?;
        let Some(team_id) = member.team_id else {
            return Err(AppError::BadRequest("User is not on a team".to_string()));
        };

        member_repo.set_team(&member.slack_id, None).await?;

        match team_repo.find_by_id(team_id).await? {
            Some(mut team) => {
                team.members.retain(|m| m.id != member.slack_id);
                if team.members.is_empty() {
                    team_repo.delete(team.id).await?;
                    tracing::info!(team_id = team.id, "Deleted empty team");
                } else {
                    team_repo.update_members(team.id, &team.members).await?;
                }
            }
            None => {
                tracing::warn!(team_id, slack_id = %member.slack_id, "Member pointed at a missing team");
            }
        }

        txn.commit().await?;

        Ok(())
    }
}

/// Re-reads the member inside the transaction.
async fn current<C: sea_orm::ConnectionTrait>(
    repo: &MemberRepository<'_, C>,
    slack_id: &str,
) -> Result<Member, AppError> {
    repo.find_by_slack_id(slack_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}

async fn find_team<C: sea_orm::ConnectionTrait>(
    repo: &TeamRepository<'_, C>,
    team_id: i32,
) -> Result<Team, AppError> {
    repo.find_by_id(team_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Team not found".to_string()))
}

fn required_team_id(team_id: Option<i32>) -> Result<i32, AppError> {
    team_id.ok_or_else(|| AppError::BadRequest("Team ID is required".to_string()))
}

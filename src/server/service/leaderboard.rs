use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::{
    model::leaderboard::{LeaderboardDto, LeaderboardTeamDto, LeaderboardUserDto},
    server::{
        data::{member::MemberRepository, team::TeamRepository},
        error::AppError,
        model::{member::Member, team::Team},
    },
};

const USER_LIMIT: usize = 100;
const NO_TEAM_NAME: &str = "No Team Assigned";

pub struct LeaderboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeaderboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self) -> Result<LeaderboardDto, AppError> {
        let members = MemberRepository::new(self.db).get_all().await?;
        let teams = TeamRepository::new(self.db).get_all().await?;

        Ok(LeaderboardDto {
            teams: rank_teams(&teams, &members),
            users: rank_users(members, &teams),
        })
    }
}

/// Members with XP who are not banned, highest XP first.
///
/// Members without a team, or whose team is missing or unnamed, get "No Team Assigned".
fn rank_users(members: Vec<Member>, teams: &[Team]) -> Vec<LeaderboardUserDto> {
    let team_names: HashMap<i32, &str> = teams
        .iter()
        .filter(|team| !team.name.trim().is_empty())
        .map(|team| (team.id, team.name.as_str()))
        .collect();

    let mut eligible: Vec<Member> = members
        .into_iter()
        .filter(|m| !m.banned && m.experience_points > 0)
        .collect();
    eligible.sort_by(|a, b| b.experience_points.cmp(&a.experience_points));

    eligible
        .into_iter()
        .take(USER_LIMIT)
        .enumerate()
        .map(|(i, m)| LeaderboardUserDto {
            rank: i + 1,
            team_name: m
                .team_id
                .and_then(|id| team_names.get(&id).copied())
                .unwrap_or(NO_TEAM_NAME)
                .to_string(),
            id: m.slack_id,
            name: m.name,
            slack_name: m.slack_name,
            xp: m.experience_points,
            team_id: m.team_id,
        })
        .collect()
}

/// Named teams with at least one member, highest total XP first.
///
/// Member XP is looked up by slack id; members missing from the table count as zero.
fn rank_teams(teams: &[Team], members: &[Member]) -> Vec<LeaderboardTeamDto> {
    let xp_by_slack_id: HashMap<&str, i32> = members
        .iter()
        .map(|m| (m.slack_id.as_str(), m.experience_points))
        .collect();

    let mut rows: Vec<LeaderboardTeamDto> = teams
        .iter()
        .filter(|team| !team.name.trim().is_empty() && !team.members.is_empty())
        .map(|team| {
            let total_xp: i64 = team
                .members
                .iter()
                .map(|m| i64::from(xp_by_slack_id.get(m.id.as_str()).copied().unwrap_or(0)))
                .sum();
            let member_count = team.members.len();
            let average_xp = (total_xp as f64 / member_count as f64).round() as i64;

            LeaderboardTeamDto {
                rank: 0,
                id: team.id,
                name: team.name.clone(),
                total_xp,
                member_count,
                average_xp,
            }
        })
        .collect();
    rows.sort_by(|a, b| b.total_xp.cmp(&a.total_xp));

    for (i, row) in rows.iter_mut().enumerate() {
        row.rank = i + 1;
    }

    rows
}

//! Pairwise project voting.

use rand::seq::SliceRandom;
use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::{
    model::vote::{CastVoteDto, VoteTallyDto, VotingPairDto},
    server::{
        data::{project::ProjectRepository, vote::VoteRepository},
        error::AppError,
        model::{project::ProjectStatus, vote::CastVoteParam},
        service::project::ProjectService,
    },
};

const PAIR_SIZE: usize = 2;

pub struct VotingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VotingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Picks two distinct approved projects at random.
    ///
    /// # Returns
    /// - `Ok(VotingPairDto)` - Two projects with team and member names
    /// - `Err(AppError::BadRequest)` - Fewer than two approved projects exist
    pub async fn pair(&self) -> Result<VotingPairDto, AppError> {
        let mut approved = ProjectRepository::new(self.db)
            .get_by_status(ProjectStatus::Approved)
            .await?;
        if approved.len() < PAIR_SIZE {
            return Err(AppError::BadRequest(
                "Not enough projects available for voting".to_string(),
            ));
        }

        approved.shuffle(&mut rand::rng());
        approved.truncate(PAIR_SIZE);

        let projects = ProjectService::new(self.db).into_dtos(approved).await?;

        Ok(VotingPairDto { projects })
    }

    pub async fn cast(&self, voter_slack_id: &str, dto: CastVoteDto) -> Result<(), AppError> {
        let param = CastVoteParam::from_dto(voter_slack_id.to_string(), dto)?;
        let vote = VoteRepository::new(self.db).create(param).await?;

        tracing::info!(
            vote_id = vote.id,
            project_chosen = vote.project_chosen,
            "Recorded vote"
        );

        Ok(())
    }

    /// Votes per project, most votes first. Projects without votes are omitted.
    pub async fn tally(&self) -> Result<Vec<VoteTallyDto>, AppError> {
        let votes = VoteRepository::new(self.db).get_all().await?;
        let names: HashMap<i32, String> = ProjectRepository::new(self.db)
            .get_all()
            .await?
            .into_iter()
            .map(|project| (project.id, project.name))
            .collect();

        let mut counts: HashMap<i32, usize> = HashMap::new();
        for vote in &votes {
            *counts.entry(vote.project_chosen).or_default() += 1;
        }

        let mut tally: Vec<VoteTallyDto> = counts
            .into_iter()
            .map(|(project_id, votes)| VoteTallyDto {
                project_id,
                project_name: names.get(&project_id).cloned().unwrap_or_default(),
                votes,
            })
            .collect();
        tally.sort_by(|a, b| b.votes.cmp(&a.votes).then(a.project_id.cmp(&b.project_id)));

        Ok(tally)
    }
}

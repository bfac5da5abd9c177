use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::{
    data::encode_column,
    model::vote::{CastVoteParam, Vote},
};

pub struct VoteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VoteRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CastVoteParam) -> Result<Vote, DbErr> {
        let entity = entity::vote::ActiveModel {
            voter_slack_id: ActiveValue::Set(param.voter_slack_id),
            projects_shown: ActiveValue::Set(encode_column(
                &param.projects_shown,
                "projects_shown",
            )?),
            project_chosen: ActiveValue::Set(param.project_chosen),
            reason: ActiveValue::Set(param.reason),
            voted_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Vote::from_entity(entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Vote>, DbErr> {
        let entities = entity::prelude::Vote::find()
            .order_by_asc(entity::vote::Column::VotedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Vote::from_entity).collect())
    }
}

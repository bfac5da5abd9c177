use crate::{
    model::vote::CastVoteDto,
    server::{data::vote::VoteRepository, error::AppError, service::voting::VotingService},
};
use test_utils::{builder::TestBuilder, factory};

mod cast;
mod pair;
mod tally;

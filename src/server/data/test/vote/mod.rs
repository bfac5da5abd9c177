use crate::server::{data::vote::VoteRepository, model::vote::CastVoteParam};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod create;

use crate::{
    model::team::CreateTeamDto,
    server::{
        data::{member::MemberRepository, team::TeamRepository},
        error::AppError,
        model::member::Member,
        service::team::TeamService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod join;
mod leave;
mod request;

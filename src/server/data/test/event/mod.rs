use crate::server::{
    data::event::EventRepository,
    model::event::{EventParam, EventTag},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod crud;

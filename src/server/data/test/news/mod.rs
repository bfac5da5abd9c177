use crate::server::{data::news::NewsRepository, model::news::NewsParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod crud;

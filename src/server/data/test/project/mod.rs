use crate::server::{
    data::project::ProjectRepository,
    model::project::{CreateProjectParam, Devlog, ProjectStatus, UpdateProjectParam},
};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;

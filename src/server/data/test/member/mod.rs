use crate::server::{
    data::member::MemberRepository,
    model::member::{CreateMemberParam, PurchaseRecord, SyncProfileParam, UpdateMemberParam},
};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod replace_purchases;
mod search;
mod set_team;
mod update_admin;

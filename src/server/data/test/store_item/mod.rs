use crate::server::{data::store_item::StoreItemRepository, model::store::StoreItemParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod crud;

use crate::{
    model::store::ToggleUsageDto,
    server::{
        data::{member::MemberRepository, store_item::StoreItemRepository},
        error::AppError,
        service::store::StoreService,
    },
};
use crate::server::model::member::Member;
use sea_orm::TransactionTrait;
use test_utils::{builder::TestBuilder, factory};

mod purchase;
mod toggle_usage;

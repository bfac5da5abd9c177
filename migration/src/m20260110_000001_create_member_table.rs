use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Member::Table)
                    .if_not_exists()
                    .col(pk_auto(Member::Id))
                    .col(string_uniq(Member::SlackId))
                    .col(string(Member::Name))
                    .col(string(Member::SlackName).default(""))
                    .col(string(Member::LegalName).default(""))
                    .col(string(Member::Email).default(""))
                    .col(string_null(Member::PhoneNumber))
                    .col(string_null(Member::Birthday))
                    .col(integer(Member::ExperiencePoints).default(0))
                    .col(integer_null(Member::TeamId))
                    .col(boolean(Member::Banned).default(false))
                    .col(text_null(Member::BanReason))
                    .col(boolean(Member::Pending).default(true))
                    .col(string_uniq(Member::InviteId))
                    .col(text(Member::PurchasedItems).default("[]"))
                    .col(
                        timestamp_with_time_zone(Member::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Member::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Member {
    Table,
    Id,
    SlackId,
    Name,
    SlackName,
    LegalName,
    Email,
    PhoneNumber,
    Birthday,
    ExperiencePoints,
    TeamId,
    Banned,
    BanReason,
    Pending,
    InviteId,
    PurchasedItems,
    CreatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StoreItem::Table)
                    .if_not_exists()
                    .col(pk_auto(StoreItem::Id))
                    .col(string(StoreItem::Name))
                    .col(text(StoreItem::Description))
                    .col(integer(StoreItem::XpPrice))
                    .col(integer(StoreItem::Quantity).default(-1))
                    .col(string(StoreItem::Category).default("Other"))
                    .col(integer(StoreItem::LimitPerPerson).default(1))
                    .col(integer_null(StoreItem::EventId))
                    .col(
                        timestamp_with_time_zone(StoreItem::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(StoreItem::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StoreItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StoreItem {
    Table,
    Id,
    Name,
    Description,
    XpPrice,
    Quantity,
    Category,
    LimitPerPerson,
    EventId,
    CreatedAt,
    UpdatedAt,
}

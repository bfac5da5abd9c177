use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(string(Event::Name))
                    .col(string(Event::Location).default(""))
                    .col(text(Event::Description))
                    .col(string(Event::DayOfWeek))
                    .col(string(Event::Hour))
                    .col(text(Event::Tags).default("[]"))
                    .col(integer_null(Event::XpToBuy))
                    .col(integer_null(Event::MaxAttendees))
                    .col(integer_null(Event::StoreItemId))
                    .col(
                        timestamp_with_time_zone(Event::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Event::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    Name,
    Location,
    Description,
    DayOfWeek,
    Hour,
    Tags,
    XpToBuy,
    MaxAttendees,
    StoreItemId,
    CreatedAt,
    UpdatedAt,
}

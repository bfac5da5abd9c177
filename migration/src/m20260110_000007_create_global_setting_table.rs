use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GlobalSetting::Table)
                    .if_not_exists()
                    .col(string(GlobalSetting::Key).primary_key())
                    .col(text(GlobalSetting::Value))
                    .col(
                        timestamp_with_time_zone(GlobalSetting::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GlobalSetting::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GlobalSetting {
    Table,
    Key,
    Value,
    UpdatedAt,
}

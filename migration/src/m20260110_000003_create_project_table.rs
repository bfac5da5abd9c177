use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Project::Table)
                    .if_not_exists()
                    .col(pk_auto(Project::Id))
                    .col(string(Project::Name))
                    .col(text(Project::Description))
                    .col(string(Project::Status).default("Created"))
                    .col(integer(Project::TeamId))
                    .col(string(Project::GitRepo).default(""))
                    .col(timestamp_with_time_zone(Project::DateSubmitted))
                    .col(text(Project::Devlogs).default("[]"))
                    .col(text(Project::HackatimeProjects).default("[]"))
                    .col(double(Project::HackatimeHours).default(0.0))
                    .col(text_null(Project::RejectionReason))
                    .col(
                        timestamp_with_time_zone(Project::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Project::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_project_team_id")
                    .table(Project::Table)
                    .col(Project::TeamId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Project::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Project {
    Table,
    Id,
    Name,
    Description,
    Status,
    TeamId,
    GitRepo,
    DateSubmitted,
    Devlogs,
    HackatimeProjects,
    HackatimeHours,
    RejectionReason,
    CreatedAt,
    UpdatedAt,
}

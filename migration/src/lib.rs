pub use sea_orm_migration::prelude::*;

mod m20260110_000001_create_member_table;
mod m20260110_000002_create_team_table;
mod m20260110_000003_create_project_table;
mod m20260110_000004_create_event_table;
mod m20260110_000005_create_store_item_table;
mod m20260110_000006_create_news_table;
mod m20260110_000007_create_global_setting_table;
mod m20260110_000008_create_vote_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_create_member_table::Migration),
            Box::new(m20260110_000002_create_team_table::Migration),
            Box::new(m20260110_000003_create_project_table::Migration),
            Box::new(m20260110_000004_create_event_table::Migration),
            Box::new(m20260110_000005_create_store_item_table::Migration),
            Box::new(m20260110_000006_create_news_table::Migration),
            Box::new(m20260110_000007_create_global_setting_table::Migration),
            Box::new(m20260110_000008_create_vote_table::Migration),
        ]
    }
}

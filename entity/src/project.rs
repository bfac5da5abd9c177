use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "project")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub status: String,
    pub team_id: i32,
    pub git_repo: String,
    pub date_submitted: DateTimeUtc,
    #[sea_orm(column_type = "Text")]
    pub devlogs: String,
    #[sea_orm(column_type = "Text")]
    pub hackatime_projects: String,
    pub hackatime_hours: f64,
    pub rejection_reason: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

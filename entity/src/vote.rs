use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vote")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub voter_slack_id: String,
    /// JSON array of the project ids the voter was shown.
    #[sea_orm(column_type = "Text")]
    pub projects_shown: String,
    pub project_chosen: i32,
    #[sea_orm(column_type = "Text")]
    pub reason: String,
    pub voted_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "team")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub team_type: String,
    /// JSON array of `{id, name, slackName}` member entries.
    #[sea_orm(column_type = "Text")]
    pub members: String,
    /// JSON array of project names.
    #[sea_orm(column_type = "Text")]
    pub projects: String,
    /// JSON array of pending join requests.
    #[sea_orm(column_type = "Text")]
    pub join_requests: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "member")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub slack_id: String,
    pub name: String,
    pub slack_name: String,
    pub legal_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub birthday: Option<String>,
    pub experience_points: i32,
    pub team_id: Option<i32>,
    pub banned: bool,
    pub ban_reason: Option<String>,
    pub pending: bool,
    #[sea_orm(unique)]
    pub invite_id: String,
    /// JSON array of purchase records.
    #[sea_orm(column_type = "Text")]
    pub purchased_items: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub location: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub day_of_week: String,
    pub hour: String,
    /// JSON array of event tags.
    #[sea_orm(column_type = "Text")]
    pub tags: String,
    pub xp_to_buy: Option<i32>,
    pub max_attendees: Option<i32>,
    pub store_item_id: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

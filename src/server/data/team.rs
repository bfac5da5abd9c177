use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::encode_column,
    model::team::{CreateTeamParam, JoinRequest, Team, TeamMember},
};

pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a team whose only member is the founder.
    ///
    /// # Returns
    /// - `Ok(Team)` - The created team
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateTeamParam) -> Result<Team, DbErr> {
        let now = Utc::now();
        let entity = entity::team::ActiveModel {
            name: ActiveValue::Set(param.name),
            team_type: ActiveValue::Set(param.team_type.to_string()),
            members: ActiveValue::Set(encode_column(&[param.founder], "members")?),
            projects: ActiveValue::Set("[]".to_string()),
            join_requests: ActiveValue::Set("[]".to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Team::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Team>, DbErr> {
        let entity = entity::prelude::Team::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Team::from_entity))
    }

    /// Gets every team, oldest first.
    pub async fn get_all(&self) -> Result<Vec<Team>, DbErr> {
        let entities = entity::prelude::Team::find()
            .order_by_asc(entity::team::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Team::from_entity).collect())
    }

    pub async fn update_members(&self, id: i32, members: &[TeamMember]) -> Result<(), DbErr> {
        self.set_list(id, entity::team::Column::Members, encode_column(members, "members")?)
            .await
    }

    pub async fn update_join_requests(
        &self,
        id: i32,
        join_requests: &[JoinRequest],
    ) -> Result<(), DbErr> {
        self.set_list(
            id,
            entity::team::Column::JoinRequests,
            encode_column(join_requests, "join_requests")?,
        )
        .await
    }

    pub async fn update_projects(&self, id: i32, projects: &[String]) -> Result<(), DbErr> {
        self.set_list(id, entity::team::Column::Projects, encode_column(projects, "projects")?)
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Team::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    async fn set_list(
        &self,
        id: i32,
        column: entity::team::Column,
        encoded: String,
    ) -> Result<(), DbErr> {
        entity::prelude::Team::update_many()
            .col_expr(column, Expr::value(encoded))
            .col_expr(entity::team::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::team::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}

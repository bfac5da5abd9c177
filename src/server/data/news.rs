use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder,
};

use crate::server::model::news::{News, NewsParam};

pub struct NewsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NewsRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: NewsParam) -> Result<News, DbErr> {
        let now = Utc::now();
        let entity = entity::news::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            md_content: ActiveValue::Set(param.md_content),
            author: ActiveValue::Set(param.author),
            publication_date: ActiveValue::Set(param.publication_date),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(News::from_entity(entity))
    }

    /// Gets every news item, newest first.
    pub async fn get_all(&self) -> Result<Vec<News>, DbErr> {
        let entities = entity::prelude::News::find()
            .order_by_desc(entity::news::Column::CreatedAt)
            .order_by_desc(entity::news::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(News::from_entity).collect())
    }

    pub async fn update(&self, id: i32, param: NewsParam) -> Result<Option<News>, DbErr> {
        let Some(entity) = entity::prelude::News::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.name = ActiveValue::Set(param.name);
        active.description = ActiveValue::Set(param.description);
        active.md_content = ActiveValue::Set(param.md_content);
        active.author = ActiveValue::Set(param.author);
        active.publication_date = ActiveValue::Set(param.publication_date);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;
        Ok(Some(News::from_entity(entity)))
    }

    /// Deletes a news item, returning whether it existed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::News::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}

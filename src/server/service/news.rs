use sea_orm::DatabaseConnection;

use crate::{
    model::news::{NewsDto, NewsInputDto},
    server::{
        data::news::NewsRepository,
        error::AppError,
        model::news::{News, NewsParam},
    },
};

pub struct NewsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NewsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Every news item, newest first, with markdown rendered to HTML.
    pub async fn get_all(&self) -> Result<Vec<NewsDto>, AppError> {
        let news = NewsRepository::new(self.db).get_all().await?;

        Ok(news.into_iter().map(News::into_dto).collect())
    }

    pub async fn create(&self, dto: NewsInputDto) -> Result<NewsDto, AppError> {
        let param = NewsParam::from_dto(dto)?;
        let news = NewsRepository::new(self.db).create(param).await?;

        Ok(news.into_dto())
    }

    pub async fn update(&self, dto: NewsInputDto) -> Result<NewsDto, AppError> {
        let id = dto
            .id
            .ok_or_else(|| AppError::BadRequest("News ID is required".to_string()))?;
        let param = NewsParam::from_dto(dto)?;

        let news = NewsRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("News item not found".to_string()))?;

        Ok(news.into_dto())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !NewsRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("News item not found".to_string()));
        }
        Ok(())
    }
}

use chrono::{DateTime, Utc};
use pulldown_cmark::{html, Options, Parser};

use crate::{
    model::news::{NewsDto, NewsInputDto},
    server::error::AppError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct News {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// Markdown body.
    pub md_content: String,
    pub author: String,
    pub publication_date: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl News {
    pub fn from_entity(entity: entity::news::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            md_content: entity.md_content,
            author: entity.author,
            publication_date: entity.publication_date,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> NewsDto {
        NewsDto {
            html_content: render_markdown(&self.md_content),
            id: self.id,
            name: self.name,
            description: self.description,
            md_content: self.md_content,
            author: self.author,
            publication_date: self.publication_date,
            created_at: self.created_at,
        }
    }
}

/// Renders markdown to HTML with tables and strikethrough enabled.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);
    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewsParam {
    pub name: String,
    pub description: String,
    pub md_content: String,
    pub author: String,
    pub publication_date: Option<String>,
}

impl NewsParam {
    pub fn from_dto(dto: NewsInputDto) -> Result<Self, AppError> {
        let name = dto.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("Name is required".to_string()));
        }

        Ok(Self {
            name,
            description: dto.description,
            md_content: dto.md_content,
            author: dto.author.trim().to_string(),
            publication_date: dto
                .publication_date
                .map(|date| date.trim().to_string())
                .filter(|date| !date.is_empty()),
        })
    }
}

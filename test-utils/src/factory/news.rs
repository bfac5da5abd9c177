//! News factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a news item with a short markdown body.
pub async fn create_news(db: &DatabaseConnection) -> Result<entity::news::Model, DbErr> {
    let id = next_id();
    let now = Utc::now();
    entity::news::ActiveModel {
        name: ActiveValue::Set(format!("News {}", id)),
        description: ActiveValue::Set("Something happened".to_string()),
        md_content: ActiveValue::Set("# Heading\n\nSome **bold** text.".to_string()),
        author: ActiveValue::Set("Organizers".to_string()),
        publication_date: ActiveValue::Set(Some("2026-06-19".to_string())),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}

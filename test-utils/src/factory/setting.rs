//! Global setting factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a raw key/value setting.
///
/// # Example
///
/// ```rust,ignore
/// factory::create_setting(&db, "adminSlackIds", r#"["U1"]"#).await?;
/// ```
pub async fn create_setting(
    db: &DatabaseConnection,
    key: &str,
    value: &str,
) -> Result<entity::global_setting::Model, DbErr> {
    entity::global_setting::ActiveModel {
        key: ActiveValue::Set(key.to_string()),
        value: ActiveValue::Set(value.to_string()),
        updated_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

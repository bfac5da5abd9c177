//! Global setting repository.
//!
//! Settings are plain key/value strings; typing and defaults live in
//! `server::model::settings`.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};
use std::collections::HashMap;

pub struct SettingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SettingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the raw value stored under `key`.
    pub async fn get(&self, key: &str) -> Result<Option<String>, DbErr> {
        let entity = entity::prelude::GlobalSetting::find_by_id(key.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(|setting| setting.value))
    }

    /// Gets every stored key/value pair.
    pub async fn get_all(&self) -> Result<HashMap<String, String>, DbErr> {
        let entities = entity::prelude::GlobalSetting::find().all(self.db).await?;

        Ok(entities
            .into_iter()
            .map(|setting| (setting.key, setting.value))
            .collect())
    }

    /// Inserts the setting or overwrites the value of an existing key.
    pub async fn upsert(&self, key: &str, value: String) -> Result<(), DbErr> {
        entity::prelude::GlobalSetting::insert(entity::global_setting::ActiveModel {
            key: ActiveValue::Set(key.to_string()),
            value: ActiveValue::Set(value),
            updated_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::global_setting::Column::Key)
                .update_columns([
                    entity::global_setting::Column::Value,
                    entity::global_setting::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec(self.db)
        .await?;

        Ok(())
    }
}

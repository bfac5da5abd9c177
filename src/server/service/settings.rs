//! Hackathon settings with a shared time-based cache.
//!
//! Settings live in the key/value `global_setting` table. Reads go through `SettingsCache`,
//! which keeps each value (and the full key/value snapshot) for five minutes; every write
//! through `SettingsService` invalidates the written key and the snapshot.

use chrono::{Datelike, Duration as DateDuration, NaiveDate, Weekday};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::RwLock;

use crate::{
    model::settings::{HackathonDataDto, HackathonSettingsDto, PublicSettingsDto},
    server::{
        data::setting::SettingRepository,
        error::AppError,
        model::settings::{key, HackathonSettings},
        util::{
            date::{parse_settings_date, weekday_label},
            json::encode_list,
        },
    },
};

/// How long a cached setting stays fresh.
const SETTINGS_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

#[derive(Clone)]
struct CachedValue<T> {
    value: T,
    cached_at: Instant,
}

impl<T> CachedValue<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            cached_at: Instant::now(),
        }
    }

    fn is_fresh(&self, ttl: Duration) -> bool {
        self.cached_at.elapsed() < ttl
    }
}

#[derive(Default)]
struct CacheState {
    entries: HashMap<String, CachedValue<Option<String>>>,
    snapshot: Option<CachedValue<HashMap<String, String>>>,
    /// Bumped on every invalidation. A database read only fills the cache when no
    /// invalidation happened since it started.
    generation: u64,
}

/// Per-key settings cache shared through `AppState`.
///
/// Cloning shares the underlying storage.
#[derive(Clone)]
pub struct SettingsCache {
    state: Arc<RwLock<CacheState>>,
    ttl: Duration,
}

impl SettingsCache {
    pub fn new() -> Self {
        Self::with_ttl(SETTINGS_CACHE_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            state: Arc::new(RwLock::new(CacheState::default())),
            ttl,
        }
    }

    /// Returns the cached value of `key`; the outer `None` means a miss.
    async fn get(&self, key: &str) -> Option<Option<String>> {
        let state = self.state.read().await;
        if let Some(entry) = state.entries.get(key).filter(|e| e.is_fresh(self.ttl)) {
            return Some(entry.value.clone());
        }
        state
            .snapshot
            .as_ref()
            .filter(|snapshot| snapshot.is_fresh(self.ttl))
            .map(|snapshot| snapshot.value.get(key).cloned())
    }

    async fn generation(&self) -> u64 {
        self.state.read().await.generation
    }

    /// Caches `value` unless the cache was invalidated after `generation` was read.
    async fn put(&self, key: &str, value: Option<String>, generation: u64) {
        let mut state = self.state.write().await;
        if state.generation == generation {
            state
                .entries
                .insert(key.to_string(), CachedValue::new(value));
        }
    }

    async fn get_all(&self) -> Option<HashMap<String, String>> {
        let state = self.state.read().await;
        state
            .snapshot
            .as_ref()
            .filter(|snapshot| snapshot.is_fresh(self.ttl))
            .map(|snapshot| snapshot.value.clone())
    }

    async fn put_all(&self, values: HashMap<String, String>, generation: u64) {
        let mut state = self.state.write().await;
        if state.generation == generation {
            state.snapshot = Some(CachedValue::new(values));
        }
    }

    /// Drops the cached value of `key` and the full snapshot.
    pub async fn invalidate(&self, key: &str) {
        let mut state = self.state.write().await;
        state.entries.remove(key);
        state.snapshot = None;
        state.generation += 1;
    }
}

impl Default for SettingsCache {
    fn default() -> Self {
        Self::new()
    }
}

pub struct SettingsService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a SettingsCache,
}

impl<'a> SettingsService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a SettingsCache) -> Self {
        Self { db, cache }
    }

    /// Gets the raw value of one setting, from cache when fresh.
    pub async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        if let Some(value) = self.cache.get(key).await {
            return Ok(value);
        }

        let generation = self.cache.generation().await;
        let value = SettingRepository::new(self.db).get(key).await?;
        self.cache.put(key, value.clone(), generation).await;

        Ok(value)
    }

    /// Gets every stored key/value pair, from cache when fresh.
    pub async fn get_all(&self) -> Result<HashMap<String, String>, AppError> {
        if let Some(values) = self.cache.get_all().await {
            return Ok(values);
        }

        let generation = self.cache.generation().await;
        let values = SettingRepository::new(self.db).get_all().await?;
        self.cache.put_all(values.clone(), generation).await;

        Ok(values)
    }

    /// Typed view of every setting with defaults filled in.
    pub async fn settings(&self) -> Result<HackathonSettings, AppError> {
        let values = self.get_all().await?;
        Ok(HackathonSettings::from_values(&values))
    }

    pub async fn admin_slack_ids(&self) -> Result<Vec<String>, AppError> {
        Ok(self.settings().await?.admin_slack_ids)
    }

    pub async fn is_admin(&self, slack_id: &str) -> Result<bool, AppError> {
        let admins = self.admin_slack_ids().await?;
        Ok(admins.iter().any(|id| id == slack_id))
    }

    /// Appends a slack id to the admin allow-list. Already listed ids are left alone.
    pub async fn add_admin(&self, slack_id: &str) -> Result<(), AppError> {
        let mut admins = self.admin_slack_ids().await?;
        if admins.iter().any(|id| id == slack_id) {
            return Ok(());
        }
        admins.push(slack_id.to_string());

        let value = encode_list(&admins, "adminSlackIds")?;
        self.write(key::ADMIN_SLACK_IDS, value).await?;

        tracing::info!(slack_id, "Added member to the admin allow-list");

        Ok(())
    }

    /// Saves the submitted settings.
    ///
    /// Per-day dates are recomputed from the start and end timestamps: weekdays found in the
    /// range overwrite the submitted dates and the date order becomes the order they were
    /// found in. The admin allow-list is never written here.
    ///
    /// # Returns
    /// - `Ok(HackathonSettings)` - Settings as stored after the update
    /// - `Err(AppError)` - Encoding or database failure
    pub async fn update(&self, dto: HackathonSettingsDto) -> Result<HackathonSettings, AppError> {
        let mut settings = HackathonSettings::from_dto(dto);

        if let (Some(start), Some(end)) = (
            parse_settings_date(&settings.start_date_and_time),
            parse_settings_date(&settings.end_date_and_time),
        ) {
            let schedule = expand_date_range(start, end);
            for (day, date) in &schedule {
                settings.days.set(*day, date.format("%Y-%m-%d").to_string());
            }
            settings.date_order = schedule
                .iter()
                .map(|(day, _)| weekday_label(*day).to_string())
                .collect();
        }

        for (key, value) in settings.to_values()? {
            self.write(key, value).await?;
        }

        self.settings().await
    }

    /// Every stored setting for the public client.
    ///
    /// `"true"` and `"false"` become booleans; the event code is withheld.
    pub async fn public_settings(&self) -> Result<PublicSettingsDto, AppError> {
        let values = self.get_all().await?;

        let settings: BTreeMap<String, Value> = values
            .into_iter()
            .filter(|(key, _)| key != key::EVENT_CODE)
            .map(|(key, value)| {
                let value = match value.as_str() {
                    "true" => Value::Bool(true),
                    "false" => Value::Bool(false),
                    _ => Value::String(value),
                };
                (key, value)
            })
            .collect();

        Ok(PublicSettingsDto(settings))
    }

    pub async fn hackathon_data(&self) -> Result<HackathonDataDto, AppError> {
        Ok(self.settings().await?.into_data_dto())
    }

    async fn write(&self, key: &str, value: String) -> Result<(), AppError> {
        SettingRepository::new(self.db).upsert(key, value).await?;
        self.cache.invalidate(key).await;
        Ok(())
    }
}

/// Assigns each weekday the first date it falls on between `start` and `end` inclusive.
///
/// Returns the weekdays in the order they were first seen. The walk stops once all seven
/// are assigned, so longer ranges keep the first occurrence. An `end` before `start`
/// yields an empty schedule.
pub fn expand_date_range(start: NaiveDate, end: NaiveDate) -> Vec<(Weekday, NaiveDate)> {
    let mut schedule: Vec<(Weekday, NaiveDate)> = Vec::with_capacity(7);
    let mut day = start;

    while day <= end && schedule.len() < 7 {
        let weekday = day.weekday();
        if !schedule.iter().any(|(seen, _)| *seen == weekday) {
            schedule.push((weekday, day));
        }
        day = match day.checked_add_signed(DateDuration::days(1)) {
            Some(next) => next,
            None => break,
        };
    }

    schedule
}

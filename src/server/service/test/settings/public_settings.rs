use super::*;

/// Tests the public settings view.
///
/// Expected: booleans converted, other values kept as strings, the event code withheld
#[tokio::test]
async fn converts_booleans_and_hides_event_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GlobalSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_setting(db, key::STORE_ENABLED, "true").await?;
    factory::create_setting(db, key::VOTING_ENABLED, "false").await?;
    factory::create_setting(db, key::MIN_AGE, "13").await?;
    factory::create_setting(db, key::EVENT_CODE, "SECRET").await?;
    let cache = SettingsCache::new();

    let public = SettingsService::new(db, &cache).public_settings().await?.0;

    assert_eq!(public.get(key::STORE_ENABLED), Some(&Value::Bool(true)));
    assert_eq!(public.get(key::VOTING_ENABLED), Some(&Value::Bool(false)));
    assert_eq!(
        public.get(key::MIN_AGE),
        Some(&Value::String("13".to_string()))
    );
    assert!(!public.contains_key(key::EVENT_CODE));

    Ok(())
}

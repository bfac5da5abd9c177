use super::*;

/// Tests saving a Friday to Sunday hackathon.
///
/// Expected: Ok with each weekday in range dated and the date order following the range
#[tokio::test]
async fn expands_schedule_from_dates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GlobalSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = SettingsCache::new();

    let settings = SettingsService::new(db, &cache)
        .update(HackathonSettingsDto {
            start_date_and_time: "2026-06-19T17:00:00Z".to_string(),
            end_date_and_time: "2026-06-21T15:00:00Z".to_string(),
            ..Default::default()
        })
        .await?;

    assert_eq!(settings.days.friday, "2026-06-19");
    assert_eq!(settings.days.saturday, "2026-06-20");
    assert_eq!(settings.days.sunday, "2026-06-21");
    assert_eq!(settings.date_order, vec!["Friday", "Saturday", "Sunday"]);

    Ok(())
}

/// Tests that a write replaces a value already held in the cache.
///
/// Expected: reads after the update see the new value
#[tokio::test]
async fn invalidates_cached_values() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GlobalSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_setting(db, key::EVENT_CODE, "OLD").await?;
    let cache = SettingsCache::new();
    let service = SettingsService::new(db, &cache);
    assert_eq!(service.get(key::EVENT_CODE).await?.as_deref(), Some("OLD"));

    service
        .update(HackathonSettingsDto {
            event_code: "NEW".to_string(),
            ..Default::default()
        })
        .await?;

    assert_eq!(service.get(key::EVENT_CODE).await?.as_deref(), Some("NEW"));
    assert_eq!(service.settings().await?.event_code, "NEW");

    Ok(())
}

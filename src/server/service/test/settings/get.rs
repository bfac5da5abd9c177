use super::*;

/// Tests that a cached value is served until its TTL passes.
///
/// Expected: a row changed behind the cache is invisible inside the TTL and read back
/// once the entry expires
#[tokio::test]
async fn serves_cached_value_until_expiry() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GlobalSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_setting(db, key::EVENT_CODE, "OLD").await?;
    let cache = SettingsCache::with_ttl(Duration::from_millis(50));
    let service = SettingsService::new(db, &cache);
    assert_eq!(service.get(key::EVENT_CODE).await?.as_deref(), Some("OLD"));

    SettingRepository::new(db)
        .upsert(key::EVENT_CODE, "NEW".to_string())
        .await?;

    assert_eq!(service.get(key::EVENT_CODE).await?.as_deref(), Some("OLD"));

    sleep(Duration::from_millis(80)).await;

    assert_eq!(service.get(key::EVENT_CODE).await?.as_deref(), Some("NEW"));

    Ok(())
}

/// Tests that the full snapshot expires the same way.
///
/// Expected: typed settings reflect the changed row only after the TTL
#[tokio::test]
async fn snapshot_expires_after_ttl() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GlobalSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_setting(db, key::SIGN_UPS_ENABLED, "false").await?;
    let cache = SettingsCache::with_ttl(Duration::from_millis(50));
    let service = SettingsService::new(db, &cache);
    assert!(!service.settings().await?.sign_ups_enabled);

    SettingRepository::new(db)
        .upsert(key::SIGN_UPS_ENABLED, "true".to_string())
        .await?;

    assert!(!service.settings().await?.sign_ups_enabled);

    sleep(Duration::from_millis(80)).await;

    assert!(service.settings().await?.sign_ups_enabled);

    Ok(())
}

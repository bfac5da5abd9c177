use super::*;

/// Tests adding the same admin twice.
///
/// Expected: the slack id is stored once and reported as admin
#[tokio::test]
async fn adds_admin_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GlobalSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = SettingsCache::new();
    let service = SettingsService::new(db, &cache);

    service.add_admin("U1").await?;
    service.add_admin("U1").await?;

    assert_eq!(service.admin_slack_ids().await?, vec!["U1".to_string()]);
    assert!(service.is_admin("U1").await?);
    assert!(!service.is_admin("U2").await?);

    Ok(())
}

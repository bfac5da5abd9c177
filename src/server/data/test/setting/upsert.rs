use super::*;

/// Tests inserting a new setting.
///
/// Expected: the value is readable by key and in the full map
#[tokio::test]
async fn inserts_new_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GlobalSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SettingRepository::new(db);
    repo.upsert("eventCode", "HACK".to_string()).await?;

    assert_eq!(repo.get("eventCode").await?.as_deref(), Some("HACK"));
    assert_eq!(repo.get_all().await?.get("eventCode").map(String::as_str), Some("HACK"));
    assert_eq!(repo.get("missing").await?, None);

    Ok(())
}

/// Tests overwriting an existing setting.
///
/// Expected: one row with the new value
#[tokio::test]
async fn overwrites_existing_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GlobalSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_setting(db, "minAge", "13").await?;
    let repo = SettingRepository::new(db);
    repo.upsert("minAge", "16".to_string()).await?;

    let all = repo.get_all().await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all.get("minAge").map(String::as_str), Some("16"));

    Ok(())
}

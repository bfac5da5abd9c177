use super::*;

/// Tests that a session without a member is rejected.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_anonymous_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let cache = SettingsCache::default();

    let result = AuthGuard::new(db, &cache, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests that a session naming a deleted member is rejected.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_unknown_member() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let cache = SettingsCache::default();

    AuthSession::new(session).set_slack_id("UGHOST").await?;
    let result = AuthGuard::new(db, &cache, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(_)))
    ));

    Ok(())
}

/// Tests that banned members are blocked even without permissions.
///
/// Expected: Err(AuthError::Banned) carrying the reason
#[tokio::test]
async fn rejects_banned_member() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let cache = SettingsCache::default();

    let member = factory::member::MemberFactory::new(db)
        .banned(Some("cheating"))
        .build()
        .await?;
    AuthSession::new(session).set_slack_id(&member.slack_id).await?;

    let result = AuthGuard::new(db, &cache, session).require(&[]).await;

    match result {
        Err(AppError::AuthErr(AuthError::Banned(reason))) => {
            assert_eq!(reason.as_deref(), Some("cheating"))
        }
        other => panic!("expected ban, got {:?}", other.map(|m| m.slack_id)),
    }

    Ok(())
}

/// Tests that a member on the admin allow-list passes the admin check.
///
/// Expected: Ok(Member)
#[tokio::test]
async fn grants_admin_on_allow_list() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .with_table(entity::prelude::GlobalSetting)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let cache = SettingsCache::default();

    let member = factory::member::MemberFactory::new(db)
        .slack_id("UADMIN")
        .build()
        .await?;
    factory::create_setting(db, "adminSlackIds", r#"["UOTHER","UADMIN"]"#).await?;
    AuthSession::new(session).set_slack_id(&member.slack_id).await?;

    let result = AuthGuard::new(db, &cache, session)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(result.slack_id, "UADMIN");

    Ok(())
}

/// Tests that a member missing from the allow-list is denied.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_admin_off_allow_list() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .with_table(entity::prelude::GlobalSetting)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let cache = SettingsCache::default();

    let member = factory::create_member(db).await?;
    factory::create_setting(db, "adminSlackIds", "UADMIN").await?;
    AuthSession::new(session).set_slack_id(&member.slack_id).await?;

    let result = AuthGuard::new(db, &cache, session)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

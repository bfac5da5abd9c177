use super::*;

/// Tests a first login while sign-ups are closed.
///
/// Expected: a pending member is created and the outcome sends them to /unauthorized
#[tokio::test]
async fn creates_pending_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .with_table(entity::prelude::GlobalSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = SettingsCache::new();
    let client = reqwest::Client::new();
    let service = RegistrationService::new(db, &cache, SlackService::new(&client, None));

    let outcome = service.resolve_login(profile("UNEW"), false).await?;

    assert_eq!(
        outcome,
        LoginOutcome::Created {
            slack_id: "UNEW".to_string(),
            sign_ups_enabled: false,
        }
    );
    assert_eq!(outcome.redirect_path(), "/unauthorized");
    let member = MemberRepository::new(db)
        .find_by_slack_id("UNEW")
        .await?
        .unwrap();
    assert!(member.pending);
    assert_eq!(member.name, "Orpheus");
    assert_eq!(member.slack_name, "Orpheus");
    assert_eq!(member.legal_name, "Orpheus Dinosaur");

    Ok(())
}

/// Tests a returning member whose email changed at the provider.
///
/// Expected: Returning outcome and the new email stored
#[tokio::test]
async fn syncs_returning_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .with_table(entity::prelude::GlobalSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let member = factory::member::MemberFactory::new(db)
        .email("old@example.com")
        .build()
        .await?;
    let cache = SettingsCache::new();
    let client = reqwest::Client::new();
    let service = RegistrationService::new(db, &cache, SlackService::new(&client, None));

    let outcome = service
        .resolve_login(profile(&member.slack_id), false)
        .await?;

    assert_eq!(outcome.redirect_path(), "/dashboard");
    let member = MemberRepository::new(db)
        .find_by_slack_id(&member.slack_id)
        .await?
        .unwrap();
    assert_eq!(member.email, "orpheus@example.com");

    Ok(())
}

/// Tests a banned member logging in.
///
/// Expected: Banned outcome carrying the reason, no session slack id
#[tokio::test]
async fn stops_banned_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .with_table(entity::prelude::GlobalSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let member = factory::member::MemberFactory::new(db)
        .banned(Some("spam"))
        .build()
        .await?;
    let cache = SettingsCache::new();
    let client = reqwest::Client::new();
    let service = RegistrationService::new(db, &cache, SlackService::new(&client, None));

    let outcome = service
        .resolve_login(profile(&member.slack_id), false)
        .await?;

    assert_eq!(outcome, LoginOutcome::Banned(Some("spam".to_string())));
    assert_eq!(outcome.session_slack_id(), None);

    Ok(())
}

/// Tests a login made with a valid admin bootstrap code.
///
/// Expected: the slack id is added to the admin allow-list
#[tokio::test]
async fn grants_admin_when_requested() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .with_table(entity::prelude::GlobalSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = SettingsCache::new();
    let client = reqwest::Client::new();
    let service = RegistrationService::new(db, &cache, SlackService::new(&client, None));

    service.resolve_login(profile("UADMIN"), true).await?;

    assert!(SettingsService::new(db, &cache).is_admin("UADMIN").await?);

    Ok(())
}

/// Tests a provider profile without a slack id.
///
/// Expected: MissingSlackId and no member created
#[tokio::test]
async fn requires_slack_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .with_table(entity::prelude::GlobalSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = SettingsCache::new();
    let client = reqwest::Client::new();
    let service = RegistrationService::new(db, &cache, SlackService::new(&client, None));

    let outcome = service
        .resolve_login(ProviderProfile::default(), false)
        .await?;

    assert_eq!(outcome, LoginOutcome::MissingSlackId);
    assert!(MemberRepository::new(db).get_all().await?.is_empty());

    Ok(())
}

/// Tests a first login when sign-ups were stored with different casing.
///
/// Expected: "True" counts as enabled and the member is sent to /event-code
#[tokio::test]
async fn treats_sign_ups_flag_case_insensitively() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .with_table(entity::prelude::GlobalSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_setting(db, key::SIGN_UPS_ENABLED, "True").await?;
    let cache = SettingsCache::new();
    let client = reqwest::Client::new();
    let service = RegistrationService::new(db, &cache, SlackService::new(&client, None));

    let outcome = service.resolve_login(profile("UNEW"), false).await?;

    assert_eq!(
        outcome,
        LoginOutcome::Created {
            slack_id: "UNEW".to_string(),
            sign_ups_enabled: true,
        }
    );
    assert_eq!(outcome.redirect_path(), "/event-code");

    Ok(())
}

use super::*;

fn submission(code: &str, birthday: &str) -> VerifyEventCodeDto {
    VerifyEventCodeDto {
        code: Some(code.to_string()),
        phone: Some("+1 555 0100".to_string()),
        birthday: Some(birthday.to_string()),
    }
}

/// Tests a matching code submitted in different case with padding.
///
/// Expected: Ok and the member is no longer pending
#[tokio::test]
async fn completes_registration() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .with_table(entity::prelude::GlobalSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    open_sign_ups(db, "HACK2026").await?;
    let member = factory::member::MemberFactory::new(db)
        .pending(true)
        .build()
        .await?;
    let cache = SettingsCache::new();
    let client = reqwest::Client::new();
    let service = RegistrationService::new(db, &cache, SlackService::new(&client, None));

    service
        .verify_event_code(&member.slack_id, submission(" hack2026 ", "2000-01-01"))
        .await?;

    let member = MemberRepository::new(db)
        .find_by_slack_id(&member.slack_id)
        .await?
        .unwrap();
    assert!(!member.pending);
    assert_eq!(member.birthday.as_deref(), Some("2000-01-01"));

    Ok(())
}

/// Tests a wrong event code.
///
/// Expected: Err(AuthError::InvalidCode)
#[tokio::test]
async fn rejects_wrong_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .with_table(entity::prelude::GlobalSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    open_sign_ups(db, "HACK2026").await?;
    let member = factory::member::MemberFactory::new(db)
        .pending(true)
        .build()
        .await?;
    let cache = SettingsCache::new();
    let client = reqwest::Client::new();
    let service = RegistrationService::new(db, &cache, SlackService::new(&client, None));

    let result = service
        .verify_event_code(&member.slack_id, submission("WRONG", "2000-01-01"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCode(_)))
    ));

    Ok(())
}

/// Tests submitting while sign-ups are closed.
///
/// Expected: Err(Forbidden)
#[tokio::test]
async fn rejects_when_sign_ups_closed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .with_table(entity::prelude::GlobalSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_setting(db, key::SIGN_UPS_ENABLED, "false").await?;
    factory::create_setting(db, key::EVENT_CODE, "HACK2026").await?;
    let member = factory::create_member(db).await?;
    let cache = SettingsCache::new();
    let client = reqwest::Client::new();
    let service = RegistrationService::new(db, &cache, SlackService::new(&client, None));

    let result = service
        .verify_event_code(&member.slack_id, submission("HACK2026", "2000-01-01"))
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests a member younger than the configured minimum age.
///
/// Expected: Err(Forbidden) naming the minimum age
#[tokio::test]
async fn enforces_minimum_age() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .with_table(entity::prelude::GlobalSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    open_sign_ups(db, "HACK2026").await?;
    factory::create_setting(db, key::MIN_AGE, "13").await?;
    let member = factory::create_member(db).await?;
    let cache = SettingsCache::new();
    let client = reqwest::Client::new();
    let service = RegistrationService::new(db, &cache, SlackService::new(&client, None));
    let birthday = (chrono::Utc::now().date_naive() - chrono::Days::new(365 * 5))
        .format("%Y-%m-%d")
        .to_string();

    let result = service
        .verify_event_code(&member.slack_id, submission("HACK2026", &birthday))
        .await;

    assert!(
        matches!(result, Err(AppError::Forbidden(msg)) if msg == "You must be at least 13 years old to register")
    );

    Ok(())
}

/// Tests a submission without a phone number.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn requires_all_fields() -> Result<(), AppError> {
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

    let result = service
        .verify_event_code(
            "U1",
            VerifyEventCodeDto {
                code: Some("HACK2026".to_string()),
                phone: None,
                birthday: Some("2000-01-01".to_string()),
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

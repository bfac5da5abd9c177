use super::*;

/// Tests a valid invite code.
///
/// Expected: Ok asking the visitor to continue with Slack authentication
#[tokio::test]
async fn accepts_event_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GlobalSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    open_sign_ups(db, "HACK2026").await?;
    let cache = SettingsCache::new();
    let client = reqwest::Client::new();
    let service = RegistrationService::new(db, &cache, SlackService::new(&client, None));

    let response = service
        .validate_invite(Some("hack2026".to_string()))
        .await?;

    assert!(response.success);
    assert!(response.requires_slack_auth);

    Ok(())
}

/// Tests an invite check before sign-ups were configured.
///
/// Expected: Err(Forbidden) "Sign ups are not configured"
#[tokio::test]
async fn fails_when_unconfigured() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GlobalSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = SettingsCache::new();
    let client = reqwest::Client::new();
    let service = RegistrationService::new(db, &cache, SlackService::new(&client, None));

    let result = service.validate_invite(Some("HACK2026".to_string())).await;

    assert!(
        matches!(result, Err(AppError::Forbidden(msg)) if msg == "Sign ups are not configured")
    );

    Ok(())
}

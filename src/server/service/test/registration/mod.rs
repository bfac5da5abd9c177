use crate::{
    model::member::VerifyEventCodeDto,
    server::{
        data::member::MemberRepository,
        error::{auth::AuthError, AppError},
        model::{member::ProviderProfile, settings::key},
        service::{
            registration::{LoginOutcome, RegistrationService},
            settings::{SettingsCache, SettingsService},
            slack::SlackService,
        },
    },
};
use test_utils::{builder::TestBuilder, factory};

mod resolve_login;
mod validate_invite;
mod verify_event_code;

fn profile(slack_id: &str) -> ProviderProfile {
    ProviderProfile {
        slack_id: Some(slack_id.to_string()),
        nickname: Some("Orpheus".to_string()),
        name: Some("Orpheus Dinosaur".to_string()),
        email: Some("orpheus@example.com".to_string()),
    }
}

async fn open_sign_ups(db: &sea_orm::DatabaseConnection, event_code: &str) -> Result<(), AppError> {
    factory::create_setting(db, key::SIGN_UPS_ENABLED, "true").await?;
    factory::create_setting(db, key::EVENT_CODE, event_code).await?;
    Ok(())
}

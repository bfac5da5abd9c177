//! Member registration: what a login means for the member record, and the event-code gate.
//!
//! A member is created on first login in the pending state. They become a full attendee by
//! submitting the event code together with their phone number and birthday.

use chrono::{NaiveDate, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::member::{InviteResponseDto, VerifyEventCodeDto},
    server::{
        data::member::MemberRepository,
        error::{auth::AuthError, AppError},
        model::{
            member::{CreateMemberParam, Member, ProviderProfile, SyncProfileParam},
            settings::key,
        },
        service::{
            settings::{SettingsCache, SettingsService},
            slack::SlackService,
        },
        util::date::age_on,
    },
};

/// Age bounds used by the event-code check when none are stored.
const VERIFY_MIN_AGE: i32 = 0;
const VERIFY_MAX_AGE: i32 = 200;

/// Where a completed login sends the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The provider profile carries no slack id.
    MissingSlackId,
    Banned(Option<String>),
    /// Existing member logged in.
    Returning { slack_id: String, pending: bool },
    /// First login, member created pending.
    Created {
        slack_id: String,
        sign_ups_enabled: bool,
    },
}

impl LoginOutcome {
    /// Slack id to store in the session, if the login establishes one.
    pub fn session_slack_id(&self) -> Option<&str> {
        match self {
            Self::Returning { slack_id, .. } | Self::Created { slack_id, .. } => Some(slack_id),
            Self::MissingSlackId | Self::Banned(_) => None,
        }
    }

    /// Path on the frontend to redirect to.
    pub fn redirect_path(&self) -> String {
        match self {
            Self::MissingSlackId => "/?error=missing_slack_id".to_string(),
            Self::Banned(reason) => {
                let reason: String =
                    url::form_urlencoded::byte_serialize(reason.as_deref().unwrap_or("").as_bytes())
                        .collect();
                format!("/banned?reason={}", reason)
            }
            Self::Returning { pending: true, .. } => "/event-code".to_string(),
            Self::Returning { pending: false, .. } => "/dashboard".to_string(),
            Self::Created {
                sign_ups_enabled: true,
                ..
            } => "/event-code".to_string(),
            Self::Created {
                sign_ups_enabled: false,
                ..
            } => "/unauthorized".to_string(),
        }
    }
}

/// Result of refreshing the session member.
#[derive(Debug)]
pub enum SyncOutcome {
    NotFound,
    Banned(Option<String>),
    Synced(Member),
}

pub struct RegistrationService<'a> {
    db: &'a DatabaseConnection,
    settings_cache: &'a SettingsCache,
    slack: SlackService<'a>,
}

impl<'a> RegistrationService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        settings_cache: &'a SettingsCache,
        slack: SlackService<'a>,
    ) -> Self {
        Self {
            db,
            settings_cache,
            slack,
        }
    }

    /// Applies a provider login to the member table.
    ///
    /// Returning members have changed profile fields synced; new members are created
    /// pending. When `set_admin` is true (a valid bootstrap code was used) the slack id is
    /// added to the admin allow-list.
    pub async fn resolve_login(
        &self,
        profile: ProviderProfile,
        set_admin: bool,
    ) -> Result<LoginOutcome, AppError> {
        let Some(slack_id) = profile.slack_id.clone().filter(|id| !id.is_empty()) else {
            tracing::warn!("Provider profile is missing a slack id");
            return Ok(LoginOutcome::MissingSlackId);
        };

        let repo = MemberRepository::new(self.db);
        let settings = SettingsService::new(self.db, self.settings_cache);

        if set_admin {
            settings.add_admin(&slack_id).await?;
        }

        if let Some(member) = repo.find_by_slack_id(&slack_id).await? {
            if member.banned {
                return Ok(LoginOutcome::Banned(member.ban_reason));
            }

            let changes = SyncProfileParam::changes(&member, &profile, None);
            repo.sync_profile(member.id, changes).await?;

            return Ok(LoginOutcome::Returning {
                slack_id,
                pending: member.pending,
            });
        }

        let slack_name = self.slack.display_name(&slack_id).await;
        let name = profile.nickname.clone().unwrap_or_default();
        let member = repo
            .create(CreateMemberParam {
                slack_id: slack_id.clone(),
                slack_name: slack_name.unwrap_or_else(|| name.clone()),
                name,
                legal_name: profile.name.unwrap_or_default(),
                email: profile.email.unwrap_or_default(),
            })
            .await?;

        tracing::info!(slack_id = %member.slack_id, "Created pending member on first login");

        let sign_ups_enabled = settings.settings().await?.sign_ups_enabled;

        Ok(LoginOutcome::Created {
            slack_id,
            sign_ups_enabled,
        })
    }

    /// Refreshes the session member from a freshly fetched provider profile and Slack.
    ///
    /// # Arguments
    /// - `slack_id` - Slack id from the session
    /// - `profile` - Provider profile, or `None` when it could not be fetched
    pub async fn sync(
        &self,
        slack_id: &str,
        profile: Option<ProviderProfile>,
    ) -> Result<SyncOutcome, AppError> {
        let repo = MemberRepository::new(self.db);

        let Some(member) = repo.find_by_slack_id(slack_id).await? else {
            return Ok(SyncOutcome::NotFound);
        };
        if member.banned {
            return Ok(SyncOutcome::Banned(member.ban_reason));
        }

        let profile = profile.unwrap_or_default();
        let slack_name = self.slack.display_name(slack_id).await;
        let changes = SyncProfileParam::changes(&member, &profile, slack_name.as_deref());
        if changes.is_empty() {
            return Ok(SyncOutcome::Synced(member));
        }

        repo.sync_profile(member.id, changes).await?;
        let member = repo
            .find_by_slack_id(slack_id)
            .await?
            .ok_or_else(|| AuthError::UserNotInDatabase(slack_id.to_string()))?;

        Ok(SyncOutcome::Synced(member))
    }

    /// Completes registration for a pending member.
    ///
    /// # Returns
    /// - `Ok(())` - Pending flag cleared, phone and birthday stored
    /// - `Err(AppError::BadRequest)` - A field is missing or the birthday is not a date
    /// - `Err(AppError::Forbidden)` - Sign-ups are off or unconfigured, no event code is
    ///   configured, or the member's age is out of bounds
    /// - `Err(AuthError::InvalidCode)` - The code does not match
    /// - `Err(AppError::NotFound)` - The member does not exist
    pub async fn verify_event_code(
        &self,
        slack_id: &str,
        dto: VerifyEventCodeDto,
    ) -> Result<(), AppError> {
        let (Some(code), Some(phone), Some(birthday)) = (
            non_blank(dto.code),
            non_blank(dto.phone),
            non_blank(dto.birthday),
        ) else {
            return Err(AppError::BadRequest(
                "Event code, phone number, and birthday are required".to_string(),
            ));
        };

        self.check_event_code(&code, "event").await?;

        let settings = SettingsService::new(self.db, self.settings_cache);
        let min_age = age_bound(settings.get(key::MIN_AGE).await?, VERIFY_MIN_AGE);
        let max_age = age_bound(settings.get(key::MAX_AGE).await?, VERIFY_MAX_AGE);

        let birth_date = NaiveDate::parse_from_str(birthday.trim(), "%Y-%m-%d")
            .map_err(|_| AppError::BadRequest("Birthday must be a YYYY-MM-DD date".to_string()))?;
        let age = age_on(birth_date, Utc::now().date_naive());
        if age < min_age {
            return Err(AppError::Forbidden(format!(
                "You must be at least {} years old to register",
                min_age
            )));
        }
        if age > max_age {
            return Err(AppError::Forbidden(format!(
                "You must be {} years old or younger to register",
                max_age
            )));
        }

        let updated = MemberRepository::new(self.db)
            .complete_registration(slack_id, phone, birthday)
            .await?;
        if !updated {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        tracing::info!(slack_id, "Member completed event-code verification");

        Ok(())
    }

    /// Checks an invite code before the visitor is sent to the identity provider.
    pub async fn validate_invite(
        &self,
        invite_code: Option<String>,
    ) -> Result<InviteResponseDto, AppError> {
        let Some(code) = non_blank(invite_code) else {
            return Err(AppError::BadRequest("Invite code is required".to_string()));
        };

        self.check_event_code(&code, "invite").await?;

        Ok(InviteResponseDto {
            success: true,
            requires_slack_auth: true,
            message: "Valid invite code. Please complete Slack authentication.".to_string(),
        })
    }

    /// Sign-ups must be configured and enabled, and the code must match the stored event code
    /// ignoring case and surrounding whitespace.
    async fn check_event_code(&self, code: &str, kind: &'static str) -> Result<(), AppError> {
        let settings = SettingsService::new(self.db, self.settings_cache);

        let Some(sign_ups) = settings.get(key::SIGN_UPS_ENABLED).await? else {
            return Err(AppError::Forbidden("Sign ups are not configured".to_string()));
        };
        if !sign_ups.trim().eq_ignore_ascii_case("true") {
            return Err(AppError::Forbidden(
                "Sign ups are currently closed. Please contact the event organizers.".to_string(),
            ));
        }

        let event_code = settings
            .get(key::EVENT_CODE)
            .await?
            .filter(|code| !code.trim().is_empty())
            .ok_or_else(|| AppError::Forbidden("Event code not configured".to_string()))?;

        if !code.trim().eq_ignore_ascii_case(event_code.trim()) {
            return Err(AuthError::InvalidCode(kind).into());
        }

        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn age_bound(stored: Option<String>, default: i32) -> i32 {
    stored
        .and_then(|value| value.trim().parse::<i32>().ok())
        .unwrap_or(default)
}

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::member::MemberRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::member::Member,
    service::settings::{SettingsCache, SettingsService},
};

pub enum Permission {
    /// Slack id must be on the `adminSlackIds` allow-list.
    Admin,
}

/// Resolves the session member and checks their permissions.
///
/// Banned members are rejected on every guarded route.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    settings_cache: &'a SettingsCache,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        settings_cache: &'a SettingsCache,
        session: &'a Session,
    ) -> Self {
        Self {
            db,
            settings_cache,
            session,
        }
    }

    /// Returns the logged-in member if they hold every listed permission.
    ///
    /// # Returns
    /// - `Ok(Member)` - The session member
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - The session names a deleted member
    /// - `Err(AuthError::Banned)` - The member is banned
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<Member, AppError> {
        let Some(slack_id) = AuthSession::new(self.session).get_slack_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(member) = MemberRepository::new(self.db)
            .find_by_slack_id(&slack_id)
            .await?
        else {
            return Err(AuthError::UserNotInDatabase(slack_id).into());
        };

        if member.banned {
            return Err(AuthError::Banned(member.ban_reason).into());
        }

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    let settings = SettingsService::new(self.db, self.settings_cache);
                    if !settings.is_admin(&member.slack_id).await? {
                        return Err(AuthError::AccessDenied(
                            member.slack_id,
                            "Member is not on the admin allow-list".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(member)
    }
}

//! Type-safe session management wrappers.
//!
//! Session data is split by concern:
//! - `AuthSession` - The logged-in member (slack id) and their provider access token
//! - `CsrfSession` - CSRF token for the OAuth flow
//! - `OAuthFlowSession` - State carried across the provider redirect (admin bootstrap)
//!
//! Each struct wraps the same underlying `Session` and only exposes its own keys.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_SLACK_ID: &str = "auth:slack_id";
const SESSION_AUTH_ACCESS_TOKEN: &str = "auth:access_token";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";
const SESSION_AUTH_SET_ADMIN: &str = "auth:set_admin";

/// Authentication session management.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the member's slack id, establishing a logged-in session.
    ///
    /// # Returns
    /// - `Ok(())` - Slack id stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_slack_id(&self, slack_id: &str) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_SLACK_ID, slack_id.to_string())
            .await?;
        Ok(())
    }

    /// Retrieves the logged-in member's slack id.
    ///
    /// # Returns
    /// - `Ok(Some(slack_id))` - A member is logged in
    /// - `Ok(None)` - No member in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_slack_id(&self) -> Result<Option<String>, AppError> {
        let slack_id = self.session.get::<String>(SESSION_AUTH_SLACK_ID).await?;
        Ok(slack_id.filter(|id| !id.is_empty()))
    }

    /// Stores the provider access token used to refresh the member's profile.
    pub async fn set_access_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_ACCESS_TOKEN, token).await?;
        Ok(())
    }

    pub async fn get_access_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.get::<String>(SESSION_AUTH_ACCESS_TOKEN).await?;
        Ok(token)
    }

    /// Clears all data from the session.
    ///
    /// Used on logout and when the session names a member that no longer exists.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

/// CSRF protection session management.
///
/// The token is stored when the login redirect is built and consumed by the callback.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token so each token validates one callback only.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - Token found and removed
    /// - `Ok(None)` - No token in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}

/// OAuth flow state carried across the provider redirect.
pub struct OAuthFlowSession<'a> {
    session: &'a Session,
}

impl<'a> OAuthFlowSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Marks that a valid admin bootstrap code was presented at login.
    pub async fn set_admin_flag(&self, set_admin: bool) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_SET_ADMIN, set_admin)
            .await?;
        Ok(())
    }

    /// Retrieves and removes the admin flag.
    ///
    /// # Returns
    /// - `Ok(true)` - The member logging in should be added to the admin list
    /// - `Ok(false)` - No admin code was presented
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_admin_flag(&self) -> Result<bool, AppError> {
        let set_admin = self
            .session
            .remove(SESSION_AUTH_SET_ADMIN)
            .await?
            .unwrap_or(false);
        Ok(set_admin)
    }
}

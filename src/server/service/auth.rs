use oauth2::{AuthorizationCode, CsrfToken, Scope, TokenResponse};
use url::Url;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::member::ProviderProfile,
    state::OAuth2Client,
};

const HACKCLUB_USERINFO_URL: &str = "https://auth.hackclub.com/oauth/userinfo";

const SCOPES: [&str; 5] = ["openid", "profile", "email", "slack_id", "verification_status"];

/// Identity returned by a completed OAuth callback.
pub struct AuthenticatedProfile {
    pub profile: ProviderProfile,
    /// Provider access token, kept in the session for later profile refreshes.
    pub access_token: String,
}

/// OAuth2 login against the Hack Club identity provider.
///
/// Only talks to the provider; what a login means for the member record is decided by
/// `RegistrationService::resolve_login`.
pub struct AuthService<'a> {
    http_client: &'a reqwest::Client,
    oauth_client: &'a OAuth2Client,
}

impl<'a> AuthService<'a> {
    pub fn new(http_client: &'a reqwest::Client, oauth_client: &'a OAuth2Client) -> Self {
        Self {
            http_client,
            oauth_client,
        }
    }

    /// Builds the provider authorization URL with a fresh CSRF token.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - Authorization URL and the CSRF state to store in the session
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let mut request = self.oauth_client.authorize_url(CsrfToken::new_random);
        for scope in SCOPES {
            request = request.add_scope(Scope::new(scope.to_string()));
        }

        request.url()
    }

    /// Exchanges the authorization code and fetches the user's profile.
    ///
    /// # Arguments
    /// - `authorization_code` - Code from the provider callback
    ///
    /// # Returns
    /// - `Ok(AuthenticatedProfile)` - Profile and access token
    /// - `Err(AuthError::TokenExchange)` - The provider rejected the code
    /// - `Err(AppError::ReqwestErr)` - Failed to fetch or parse the userinfo response
    pub async fn callback(&self, authorization_code: String) -> Result<AuthenticatedProfile, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|err| AuthError::TokenExchange(err.to_string()))?;

        let access_token = token.access_token().secret().to_string();
        let profile = self.fetch_profile(&access_token).await?;

        Ok(AuthenticatedProfile {
            profile,
            access_token,
        })
    }

    /// Fetches the userinfo profile for an access token.
    pub async fn fetch_profile(&self, access_token: &str) -> Result<ProviderProfile, AppError> {
        let profile = self
            .http_client
            .get(HACKCLUB_USERINFO_URL)
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?
            .json::<ProviderProfile>()
            .await?;

        Ok(profile)
    }
}

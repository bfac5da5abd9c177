//! Application state shared across all request handlers.
//!
//! `AppState` is built once at startup and cloned into each handler through Axum's state
//! extraction. Every field is cheap to clone: the database pool, reqwest client and settings
//! cache share their internals behind `Arc`s.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

use super::service::{admin_code::AdminCodeService, settings::SettingsCache};

/// OAuth2 client configured for the Hack Club identity provider.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,

    /// Client for the identity provider, Slack and Hackatime. Redirects are disabled.
    pub http_client: reqwest::Client,

    pub oauth_client: OAuth2Client,

    /// One-time codes that grant admin to the first login when no admin exists.
    pub admin_code_service: AdminCodeService,

    /// Read-through cache over the settings table.
    pub settings_cache: SettingsCache,

    /// Frontend base URL, used to build post-login redirects.
    pub app_url: String,

    /// Slack bot token for display name lookups. Lookups are skipped when unset.
    pub slack_bot_token: Option<String>,

    /// HS256 secret for support chat identity tokens.
    pub intercom_secret: Option<String>,
}

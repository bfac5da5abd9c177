//! One-time initialization of the database, sessions, HTTP clients and admin bootstrap.

use oauth2::{basic::BasicClient, AuthType, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::{Config, HACKCLUB_AUTH_URL, HACKCLUB_TOKEN_URL},
    error::{config::ConfigError, AppError},
    service::{
        admin_code::AdminCodeService,
        settings::{SettingsCache, SettingsService},
    },
    state::OAuth2Client,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by a table in the application database.
///
/// Sessions expire after seven days of inactivity. Cookies are marked secure when
/// `SECURE_COOKIES` is set.
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(config.secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// HTTP client for outbound calls. Redirects are never followed.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// OAuth2 client for the Hack Club identity provider.
///
/// Client credentials are sent in the token request body.
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let client = BasicClient::new(ClientId::new(config.hackclub_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.hackclub_client_secret.clone()))
        .set_auth_uri(AuthUrl::new(HACKCLUB_AUTH_URL.to_string()).map_err(invalid_url)?)
        .set_token_uri(TokenUrl::new(HACKCLUB_TOKEN_URL.to_string()).map_err(invalid_url)?)
        .set_redirect_uri(RedirectUrl::new(config.redirect_url()).map_err(invalid_url)?)
        .set_auth_type(AuthType::RequestBody);

    Ok(client)
}

fn invalid_url(err: url::ParseError) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: "APP_URL".to_string(),
        reason: err.to_string(),
    }
}

/// Logs a one-time admin login link when the admin allow-list is empty.
///
/// The link carries a code valid for 60 seconds; whoever logs in with it is added to the
/// allow-list.
pub async fn check_for_admin(
    db: &DatabaseConnection,
    settings_cache: &SettingsCache,
    config: &Config,
    admin_code_service: &AdminCodeService,
) -> Result<(), AppError> {
    let admins = SettingsService::new(db, settings_cache)
        .admin_slack_ids()
        .await?;

    if admins.is_empty() {
        let code = admin_code_service.generate().await;
        tracing::info!(
            "No admin is configured. Log in within 60 seconds to become admin: {}/api/auth/login?admin_code={}",
            config.app_url,
            code
        );
    }

    Ok(())
}

mod model;
mod server;

use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::AppError,
    service::{admin_code::AdminCodeService, settings::SettingsCache},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;

    let admin_code_service = AdminCodeService::new();
    let settings_cache = SettingsCache::new();

    startup::check_for_admin(&db, &settings_cache, &config, &admin_code_service).await?;

    let state = AppState {
        db,
        http_client,
        oauth_client,
        admin_code_service,
        settings_cache,
        app_url: config.app_url.clone(),
        slack_bot_token: config.slack_bot_token.clone(),
        intercom_secret: config.intercom_secret.clone(),
    };

    let app = server::router::router()
        .with_state(state)
        .layer(session)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .map_err(|e| {
            AppError::InternalError(format!("Failed to bind {}: {}", config.bind_address, e))
        })?;

    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))?;

    Ok(())
}

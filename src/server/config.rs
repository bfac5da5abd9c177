use crate::server::error::{config::ConfigError, AppError};

pub const HACKCLUB_AUTH_URL: &str = "https://auth.hackclub.com/oauth/authorize";
pub const HACKCLUB_TOKEN_URL: &str = "https://auth.hackclub.com/oauth/token";

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,

    pub hackclub_client_id: String,
    pub hackclub_client_secret: String,

    /// Frontend base URL; the OAuth redirect is `{app_url}/api/auth/callback`.
    pub app_url: String,

    pub slack_bot_token: Option<String>,
    pub intercom_secret: Option<String>,

    pub bind_address: String,
    pub secure_cookies: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            hackclub_client_id: required("HACKCLUB_CLIENT_ID")?,
            hackclub_client_secret: required("HACKCLUB_CLIENT_SECRET")?,
            app_url: required("APP_URL")?.trim_end_matches('/').to_string(),
            slack_bot_token: optional("SLACK_BOT_TOKEN"),
            intercom_secret: optional("INTERCOM_SECRET_KEY"),
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            secure_cookies: match optional("SECURE_COOKIES") {
                Some(value) => parse_bool("SECURE_COOKIES", &value)?,
                None => false,
            },
        })
    }

    pub fn redirect_url(&self) -> String {
        format!("{}/api/auth/callback", self.app_url)
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Unset and blank variables are both treated as absent.
fn optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: format!("expected a boolean, got `{}`", value),
        }),
    }
}

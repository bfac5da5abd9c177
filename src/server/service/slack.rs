//! Slack Web API lookups.
//!
//! Only used to resolve a member's Slack display name. Lookups fail soft: a missing bot
//! token, a network error or an unsuccessful API response all yield `None`.

use serde::Deserialize;

const SLACK_USERS_INFO_URL: &str = "https://slack.com/api/users.info";

#[derive(Debug, Deserialize)]
pub struct UsersInfoResponse {
    #[serde(default)]
    pub ok: bool,
    pub user: Option<SlackUser>,
}

#[derive(Debug, Deserialize)]
pub struct SlackUser {
    pub real_name: Option<String>,
    pub profile: Option<SlackProfile>,
}

#[derive(Debug, Deserialize)]
pub struct SlackProfile {
    pub display_name: Option<String>,
}

impl UsersInfoResponse {
    /// Profile display name, falling back to the real name. Blank names count as missing.
    pub fn display_name(self) -> Option<String> {
        if !self.ok {
            return None;
        }
        let user = self.user?;
        let display_name = user
            .profile
            .and_then(|profile| profile.display_name)
            .filter(|name| !name.trim().is_empty());

        display_name.or(user.real_name.filter(|name| !name.trim().is_empty()))
    }
}

pub struct SlackService<'a> {
    http_client: &'a reqwest::Client,
    bot_token: Option<&'a str>,
}

impl<'a> SlackService<'a> {
    pub fn new(http_client: &'a reqwest::Client, bot_token: Option<&'a str>) -> Self {
        Self {
            http_client,
            bot_token,
        }
    }

    /// Looks up the Slack display name of a user.
    ///
    /// # Returns
    /// - `Some(name)` - Display name, or real name when no display name is set
    /// - `None` - No bot token configured, or the lookup failed
    pub async fn display_name(&self, slack_id: &str) -> Option<String> {
        let token = self.bot_token?;

        let response = self
            .http_client
            .get(SLACK_USERS_INFO_URL)
            .query(&[("user", slack_id)])
            .bearer_auth(token)
            .send()
            .await;

        let info = match response {
            Ok(response) => response.json::<UsersInfoResponse>().await,
            Err(err) => Err(err),
        };

        match info {
            Ok(info) => info.display_name(),
            Err(err) => {
                tracing::warn!(slack_id, "Slack users.info lookup failed: {}", err);
                None
            }
        }
    }
}

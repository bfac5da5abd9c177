//! Hackatime coding-time stats.
//!
//! A project's tracked hours are the sum, over every linked Hackatime project, of that
//! project's `total_seconds` in the linking member's stats. Stats lookups fail soft; a member
//! whose stats cannot be fetched contributes nothing.

use serde::Deserialize;
use std::collections::HashMap;

use crate::server::model::project::HackatimeLink;

const HACKATIME_API_URL: &str = "https://hackatime.hackclub.com/api/v1";

#[derive(Debug, Deserialize)]
pub struct StatsResponse {
    pub data: Option<StatsData>,
}

#[derive(Debug, Deserialize)]
pub struct StatsData {
    #[serde(default)]
    pub projects: Vec<ProjectStats>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectStats {
    pub name: String,
    #[serde(default)]
    pub total_seconds: f64,
}

impl StatsResponse {
    /// Tracked seconds for the named project, `0` when it is not listed.
    pub fn seconds_for(&self, project_name: &str) -> f64 {
        self.data
            .as_ref()
            .and_then(|data| data.projects.iter().find(|p| p.name == project_name))
            .map(|project| project.total_seconds)
            .unwrap_or(0.0)
    }
}

/// Converts seconds to hours rounded to two decimals.
pub fn round_hours(total_seconds: f64) -> f64 {
    (total_seconds / 3600.0 * 100.0).round() / 100.0
}

pub struct HackatimeService<'a> {
    http_client: &'a reqwest::Client,
    base_url: &'a str,
}

impl<'a> HackatimeService<'a> {
    pub fn new(http_client: &'a reqwest::Client) -> Self {
        Self {
            http_client,
            base_url: HACKATIME_API_URL,
        }
    }

    /// Fetches a member's per-project stats.
    ///
    /// # Returns
    /// - `Some(StatsResponse)` - Stats were fetched and parsed
    /// - `None` - Request failed, returned an error status or could not be parsed
    pub async fn stats(&self, slack_id: &str) -> Option<StatsResponse> {
        let url = format!(
            "{}/users/{}/stats?features=projects",
            self.base_url, slack_id
        );

        let result = async {
            self.http_client
                .get(&url)
                .send()
                .await?
                .error_for_status()?
                .json::<StatsResponse>()
                .await
        }
        .await;

        match result {
            Ok(stats) => Some(stats),
            Err(err) => {
                tracing::warn!(slack_id, "Failed to fetch Hackatime stats: {}", err);
                None
            }
        }
    }

    /// Sums the tracked hours of every linked project.
    ///
    /// Each member's stats are fetched once even when they linked several projects.
    pub async fn total_hours(&self, links: &[HackatimeLink]) -> f64 {
        let mut stats_by_user: HashMap<&str, Option<StatsResponse>> = HashMap::new();
        let mut total_seconds = 0.0;

        for link in links {
            if !stats_by_user.contains_key(link.user_id.as_str()) {
                let stats = self.stats(&link.user_id).await;
                stats_by_user.insert(link.user_id.as_str(), stats);
            }
            if let Some(Some(stats)) = stats_by_user.get(link.user_id.as_str()) {
                total_seconds += stats.seconds_for(&link.project_name);
            }
        }

        round_hours(total_seconds)
    }
}

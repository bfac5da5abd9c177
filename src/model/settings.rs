use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Every hackathon setting with its typed value.
///
/// Used both as the admin read model and the admin update body; absent fields on update fall
/// back to their defaults.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct HackathonSettingsDto {
    pub start_date_and_time: String,
    pub end_date_and_time: String,
    pub monday: String,
    pub tuesday: String,
    pub wednesday: String,
    pub thursday: String,
    pub friday: String,
    pub saturday: String,
    pub sunday: String,
    pub date_order: Vec<String>,
    pub admin_slack_ids: Vec<String>,
    pub sign_ups_enabled: bool,
    pub event_code: String,
    pub min_age: u32,
    pub max_age: u32,
    pub voting_enabled: bool,
    pub projects_enabled: bool,
    pub team_enabled: bool,
    pub events_enabled: bool,
    pub news_enabled: bool,
    pub leaderboard_enabled: bool,
    pub store_enabled: bool,
}

/// Public view of the stored settings: `"true"`/`"false"` become booleans, the event code
/// is withheld.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct PublicSettingsDto(pub BTreeMap<String, serde_json::Value>);

/// Schedule subset consumed by the landing page.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HackathonDataDto {
    #[serde(rename = "start-date-and-time")]
    pub start_date_and_time: String,
    #[serde(rename = "end-date-and-time")]
    pub end_date_and_time: String,
    pub monday: String,
    pub tuesday: String,
    pub wednesday: String,
    pub thursday: String,
    pub friday: String,
    pub saturday: String,
    pub sunday: String,
    #[serde(rename = "dateOrder")]
    pub date_order: Vec<String>,
    #[serde(rename = "admin-slack-ids")]
    pub admin_slack_ids: Vec<String>,
}

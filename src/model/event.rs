use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub description: String,
    pub day_of_week: String,
    pub hour: String,
    pub tags: Vec<String>,
    pub is_main_event: bool,
    pub is_store_unlockable: bool,
    pub has_limited_attendees: bool,
    /// Present only for store-unlockable events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xp_to_buy: Option<i32>,
    /// Present only for events with limited attendees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attendees: Option<i32>,
    pub store_item_id: Option<i32>,
}

/// Admin create/update body. `id` is required for updates.
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventInputDto {
    pub id: Option<i32>,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    pub day_of_week: String,
    pub hour: String,
    /// Any of `"Main event"`, `"Store-unlockable"`, `"Limited attendees"`.
    #[serde(default)]
    pub tags: Vec<String>,
    pub xp_to_buy: Option<i32>,
    pub max_attendees: Option<i32>,
    pub store_item_id: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyTicketDto {
    pub ticket_data: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketUserDto {
    pub name: String,
    pub email: String,
    pub slack_name: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketEventDto {
    pub name: String,
    pub location: String,
    pub day_of_week: String,
    pub hour: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct TicketVerificationDto {
    pub valid: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<TicketUserDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<TicketEventDto>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One store purchase recorded on a member.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRecordDto {
    pub item_id: i32,
    pub item_name: String,
    pub category: String,
    pub xp_price: i32,
    pub purchased_at: DateTime<Utc>,
    pub used: bool,
    pub used_at: Option<DateTime<Utc>>,
}

/// Profile of the logged-in member.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserDto {
    /// Slack id of the member.
    pub id: String,
    pub name: String,
    pub email: String,
    pub xp: i32,
    pub team_id: Option<i32>,
    pub team_name: String,
    pub invite_id: String,
    pub pending: bool,
    pub purchased_items: Vec<PurchaseRecordDto>,
    /// Ticket strings for every store-unlockable event the member bought access to.
    pub tickets: Vec<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeResponseDto {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<CurrentUserDto>,
}

/// Result of refreshing the session member from the identity provider.
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SyncResponseDto {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<CurrentUserDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ban_reason: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct BanStatusDto {
    pub banned: bool,
    pub reason: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct VerifyEventCodeDto {
    pub code: Option<String>,
    pub phone: Option<String>,
    /// Date of birth as `YYYY-MM-DD`.
    pub birthday: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InviteCodeDto {
    pub invite_code: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InviteResponseDto {
    pub success: bool,
    pub requires_slack_auth: bool,
    pub message: String,
}

/// Member row in the admin user list and search results.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberSummaryDto {
    pub id: i32,
    pub invite_id: String,
    pub name: String,
    pub email: String,
    pub slack_name: String,
    pub slack_id: String,
    pub xp: i32,
    pub banned: bool,
    pub team_id: Option<i32>,
    pub pending: bool,
}

/// Full member record for the admin detail page.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberDetailDto {
    pub id: i32,
    pub invite_id: String,
    pub name: String,
    pub legal_name: String,
    pub email: String,
    pub slack_name: String,
    pub slack_id: String,
    pub phone_number: Option<String>,
    pub birthday: Option<String>,
    pub xp: i32,
    pub banned: bool,
    pub ban_reason: Option<String>,
    pub pending: bool,
    pub team_id: Option<i32>,
    pub team_name: Option<String>,
    pub purchased_items: Vec<PurchaseRecordDto>,
    pub created_at: DateTime<Utc>,
}

/// Admin edits to a member. Absent fields are left unchanged.
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemberDto {
    pub banned: Option<bool>,
    pub ban_reason: Option<String>,
    pub experience_points: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IsAdminDto {
    pub is_admin: bool,
}

#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IntercomUserDto {
    pub xp: i32,
    pub team_id: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct IntercomTokenDto {
    pub token: String,
    pub user: IntercomUserDto,
}

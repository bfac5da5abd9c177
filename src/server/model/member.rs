//! Member domain models and parameters.
//!
//! A member is an attendee identified by their Slack id. The purchase list is decoded from
//! its JSON column once, at the repository boundary, so services work with typed records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    model::member::{MemberDetailDto, MemberSummaryDto, PurchaseRecordDto},
    server::util::json::decode_list,
};

/// One store purchase recorded on a member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRecord {
    pub item_id: i32,
    pub item_name: String,
    #[serde(default)]
    pub category: String,
    pub xp_price: i32,
    pub purchased_at: DateTime<Utc>,
    #[serde(default)]
    pub used: bool,
    #[serde(default)]
    pub used_at: Option<DateTime<Utc>>,
}

impl PurchaseRecord {
    pub fn into_dto(self) -> PurchaseRecordDto {
        PurchaseRecordDto {
            item_id: self.item_id,
            item_name: self.item_name,
            category: self.category,
            xp_price: self.xp_price,
            purchased_at: self.purchased_at,
            used: self.used,
            used_at: self.used_at,
        }
    }
}

/// Attendee with identity, registration state, XP balance and purchases.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: i32,
    pub slack_id: String,
    /// Display name.
    pub name: String,
    pub slack_name: String,
    pub legal_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub birthday: Option<String>,
    pub experience_points: i32,
    pub team_id: Option<i32>,
    pub banned: bool,
    pub ban_reason: Option<String>,
    /// Authenticated but has not completed event-code verification.
    pub pending: bool,
    pub invite_id: String,
    pub purchases: Vec<PurchaseRecord>,
    pub created_at: DateTime<Utc>,
}

impl Member {
    /// Converts an entity model to a member domain model at the repository boundary.
    ///
    /// A malformed purchase list decodes to an empty list rather than failing.
    pub fn from_entity(entity: entity::member::Model) -> Self {
        Self {
            id: entity.id,
            slack_id: entity.slack_id,
            name: entity.name,
            slack_name: entity.slack_name,
            legal_name: entity.legal_name,
            email: entity.email,
            phone_number: entity.phone_number,
            birthday: entity.birthday,
            experience_points: entity.experience_points,
            team_id: entity.team_id,
            banned: entity.banned,
            ban_reason: entity.ban_reason,
            pending: entity.pending,
            invite_id: entity.invite_id,
            purchases: decode_list(&entity.purchased_items, "purchased_items"),
            created_at: entity.created_at,
        }
    }

    /// Number of purchase records for the given store item.
    pub fn purchase_count(&self, item_id: i32) -> usize {
        self.purchases
            .iter()
            .filter(|purchase| purchase.item_id == item_id)
            .count()
    }

    pub fn has_purchased(&self, item_id: i32) -> bool {
        self.purchase_count(item_id) > 0
    }

    pub fn into_summary_dto(self) -> MemberSummaryDto {
        MemberSummaryDto {
            id: self.id,
            invite_id: self.invite_id,
            name: self.name,
            email: self.email,
            slack_name: self.slack_name,
            slack_id: self.slack_id,
            xp: self.experience_points,
            banned: self.banned,
            team_id: self.team_id,
            pending: self.pending,
        }
    }

    pub fn into_detail_dto(self, team_name: Option<String>) -> MemberDetailDto {
        MemberDetailDto {
            id: self.id,
            invite_id: self.invite_id,
            name: self.name,
            legal_name: self.legal_name,
            email: self.email,
            slack_name: self.slack_name,
            slack_id: self.slack_id,
            phone_number: self.phone_number,
            birthday: self.birthday,
            xp: self.experience_points,
            banned: self.banned,
            ban_reason: self.ban_reason,
            pending: self.pending,
            team_id: self.team_id,
            team_name,
            purchased_items: self
                .purchases
                .into_iter()
                .map(PurchaseRecord::into_dto)
                .collect(),
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a member on first login.
#[derive(Debug, Clone)]
pub struct CreateMemberParam {
    pub slack_id: String,
    pub name: String,
    pub slack_name: String,
    pub legal_name: String,
    pub email: String,
}

/// Profile fields refreshed from the identity provider. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyncProfileParam {
    pub name: Option<String>,
    pub slack_name: Option<String>,
    pub legal_name: Option<String>,
    pub email: Option<String>,
}

impl SyncProfileParam {
    /// Builds the set of fields that differ between the stored member and a fresh profile.
    ///
    /// Empty incoming values never overwrite stored ones.
    pub fn changes(member: &Member, profile: &ProviderProfile, slack_name: Option<&str>) -> Self {
        fn changed(current: &str, incoming: Option<&str>) -> Option<String> {
            match incoming {
                Some(value) if !value.is_empty() && value != current => Some(value.to_string()),
                _ => None,
            }
        }

        Self {
            name: changed(&member.name, profile.nickname.as_deref()),
            slack_name: changed(&member.slack_name, slack_name),
            legal_name: changed(&member.legal_name, profile.name.as_deref()),
            email: changed(&member.email, profile.email.as_deref()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.slack_name.is_none()
            && self.legal_name.is_none()
            && self.email.is_none()
    }
}

/// Identity returned by the OAuth provider's userinfo endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderProfile {
    pub slack_id: Option<String>,
    /// Display name.
    pub nickname: Option<String>,
    /// Legal name.
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Admin edits to a member. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateMemberParam {
    pub banned: Option<bool>,
    pub ban_reason: Option<Option<String>>,
    pub experience_points: Option<i32>,
}

impl From<crate::model::member::UpdateMemberDto> for UpdateMemberParam {
    fn from(dto: crate::model::member::UpdateMemberDto) -> Self {
        // Unbanning clears the reason.
        let ban_reason = if dto.banned == Some(false) {
            Some(None)
        } else {
            dto.ban_reason
                .map(|reason| Some(reason).filter(|r| !r.trim().is_empty()))
        };

        Self {
            banned: dto.banned,
            ban_reason,
            experience_points: dto.experience_points,
        }
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::member::PurchaseRecordDto;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RelatedEventDto {
    pub id: i32,
    pub name: String,
    pub day_of_week: String,
    pub hour: String,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoreItemDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub xp_price: i32,
    /// Remaining stock, `-1` for unlimited.
    pub quantity: i32,
    pub category: String,
    pub limit_per_person: i32,
    /// `"In stock"` or `"Out of stock"`, derived from quantity.
    pub stock_status: String,
    pub event_id: Option<i32>,
    pub related_event: Option<RelatedEventDto>,
}

/// Admin create/update body. `id` is required for updates.
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoreItemInputDto {
    pub id: Option<i32>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub xp_price: i32,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default = "default_limit")]
    pub limit_per_person: i32,
    pub event_id: Option<i32>,
}

fn default_quantity() -> i32 {
    -1
}

fn default_category() -> String {
    "Other".to_string()
}

fn default_limit() -> i32 {
    1
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequestDto {
    pub item_id: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PurchaseResponseDto {
    pub success: bool,
    pub purchase: PurchaseRecordDto,
    #[serde(rename = "newXP")]
    pub new_xp: i32,
    pub message: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToggleUsageDto {
    pub purchase_index: Option<usize>,
    pub mark_as_used: Option<bool>,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToggleUsageResponseDto {
    pub success: bool,
    pub message: String,
    pub updated_item: PurchaseRecordDto,
}

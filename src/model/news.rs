use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewsDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub md_content: String,
    /// `md_content` rendered to HTML.
    pub html_content: String,
    pub author: String,
    pub publication_date: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewsInputDto {
    pub id: Option<i32>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub md_content: String,
    #[serde(default)]
    pub author: String,
    pub publication_date: Option<String>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CardDto {
    pub id: i32,
    pub list_id: i32,
    pub name: String,
    pub description: String,
    pub date_end: Option<DateTime<Utc>>,
    /// 1-based position within the list.
    pub position: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCardDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub date_end: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateCardDto {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PatchCardDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub date_end: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MoveCardDto {
    pub position: i32,
    /// Destination list, equal to the current list for a move within the list.
    pub new_list_id: i32,
}

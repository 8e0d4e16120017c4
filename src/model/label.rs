use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LabelDto {
    pub id: i32,
    pub card_id: i32,
    pub title: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateLabelDto {
    pub title: String,
    pub color: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PatchLabelDto {
    pub title: Option<String>,
    pub color: Option<String>,
}

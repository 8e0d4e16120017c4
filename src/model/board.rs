use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BoardDto {
    pub id: i32,
    pub workspace_id: i32,
    pub name: String,
    pub background_color: String,
    /// Number of lists on the board.
    pub list_nb: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateBoardDto {
    pub name: String,
    pub background_color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateBoardDto {
    pub name: String,
    pub background_color: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PatchBoardDto {
    pub name: Option<String>,
    pub background_color: Option<String>,
}

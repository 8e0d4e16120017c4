use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MemberDto {
    pub id: i32,
    pub workspace_id: i32,
    pub user_id: i32,
    pub username: String,
    pub avatar_url: Option<String>,
    pub admin: bool,
    pub can_create_board: bool,
    pub can_delete_board: bool,
    pub can_invite: bool,
}

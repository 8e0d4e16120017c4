use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InvitationDto {
    pub id: i32,
    pub workspace_id: i32,
    pub workspace_name: String,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
}

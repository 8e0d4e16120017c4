use chrono::{DateTime, Utc};

use crate::model::invitation::InvitationDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Invitation {
    pub id: i32,
    pub workspace_id: i32,
    pub workspace_name: String,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
}

impl Invitation {
    pub fn from_entity(
        invitation: entity::workspace_invitation::Model,
        workspace: entity::workspace::Model,
    ) -> Self {
        Self {
            id: invitation.id,
            workspace_id: invitation.workspace_id,
            workspace_name: workspace.name,
            user_id: invitation.user_id,
            created_at: invitation.created_at,
        }
    }

    pub fn into_dto(self) -> InvitationDto {
        InvitationDto {
            id: self.id,
            workspace_id: self.workspace_id,
            workspace_name: self.workspace_name,
            user_id: self.user_id,
            created_at: self.created_at,
        }
    }
}

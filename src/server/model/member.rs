//! Workspace membership and rights.

use crate::model::member::MemberDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Member {
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

impl Member {
    /// Builds a member from its membership row and the member's user row.
    pub fn from_entity(member: entity::workspace_member::Model, user: entity::user::Model) -> Self {
        Self {
            id: member.id,
            workspace_id: member.workspace_id,
            user_id: member.user_id,
            username: user.username,
            avatar_url: user.avatar_url,
            admin: member.admin,
            can_create_board: member.can_create_board,
            can_delete_board: member.can_delete_board,
            can_invite: member.can_invite,
        }
    }

    /// Whether the member holds `right`. Admins hold every right.
    pub fn has(&self, right: MemberRight) -> bool {
        self.admin
            || match right {
                MemberRight::Admin => false,
                MemberRight::CreateBoard => self.can_create_board,
                MemberRight::DeleteBoard => self.can_delete_board,
                MemberRight::Invite => self.can_invite,
            }
    }

    pub fn into_dto(self) -> MemberDto {
        MemberDto {
            id: self.id,
            workspace_id: self.workspace_id,
            user_id: self.user_id,
            username: self.username,
            avatar_url: self.avatar_url,
            admin: self.admin,
            can_create_board: self.can_create_board,
            can_delete_board: self.can_delete_board,
            can_invite: self.can_invite,
        }
    }
}

/// A single toggleable member flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberRight {
    Admin,
    CreateBoard,
    DeleteBoard,
    Invite,
}

impl MemberRight {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Admin => "administration",
            Self::CreateBoard => "board creation",
            Self::DeleteBoard => "board deletion",
            Self::Invite => "invitation",
        }
    }
}

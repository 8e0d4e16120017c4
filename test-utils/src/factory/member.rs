//! Workspace member factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for workspace memberships. Defaults to a member without any right.
pub struct MemberFactory<'a> {
    db: &'a DatabaseConnection,
    workspace_id: i32,
    user_id: i32,
    admin: bool,
    can_create_board: bool,
    can_delete_board: bool,
    can_invite: bool,
}

impl<'a> MemberFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, workspace_id: i32, user_id: i32) -> Self {
        Self {
            db,
            workspace_id,
            user_id,
            admin: false,
            can_create_board: false,
            can_delete_board: false,
            can_invite: false,
        }
    }

    pub fn admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    pub fn can_create_board(mut self, value: bool) -> Self {
        self.can_create_board = value;
        self
    }

    pub fn can_delete_board(mut self, value: bool) -> Self {
        self.can_delete_board = value;
        self
    }

    pub fn can_invite(mut self, value: bool) -> Self {
        self.can_invite = value;
        self
    }

    /// Grants every right, as held by a workspace creator.
    pub fn all_rights(self) -> Self {
        self.admin(true)
            .can_create_board(true)
            .can_delete_board(true)
            .can_invite(true)
    }

    pub async fn build(self) -> Result<entity::workspace_member::Model, DbErr> {
        entity::workspace_member::ActiveModel {
            workspace_id: ActiveValue::Set(self.workspace_id),
            user_id: ActiveValue::Set(self.user_id),
            admin: ActiveValue::Set(self.admin),
            can_create_board: ActiveValue::Set(self.can_create_board),
            can_delete_board: ActiveValue::Set(self.can_delete_board),
            can_invite: ActiveValue::Set(self.can_invite),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Adds `user_id` to the workspace without any right.
pub async fn create_member(
    db: &DatabaseConnection,
    workspace_id: i32,
    user_id: i32,
) -> Result<entity::workspace_member::Model, DbErr> {
    MemberFactory::new(db, workspace_id, user_id).build().await
}

//! Session based access control.
//!
//! `AuthGuard` resolves the logged in user from the session and checks the requested
//! permissions against workspace memberships. Resources nested below a workspace (boards,
//! lists, cards) are resolved up to their workspace first, so a missing resource yields
//! 404 before any right is checked.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{
        board::BoardRepository, board_list::BoardListRepository, card::CardRepository,
        member::MemberRepository, user::UserRepository, workspace::WorkspaceRepository,
    },
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::{member::MemberRight, user::User},
};

/// Access requirement checked by `AuthGuard::require`.
///
/// Each variant carries the ID of the resource it applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Member of the workspace.
    WorkspaceMember(i32),
    /// Admin of the workspace.
    WorkspaceAdmin(i32),
    /// The user who created the workspace.
    WorkspaceCreator(i32),
    /// Admin, or member allowed to create boards.
    CreateBoard(i32),
    /// Admin, or member allowed to delete boards.
    DeleteBoard(i32),
    /// Admin, or member allowed to invite users.
    Invite(i32),
    /// Member of the workspace owning the board.
    BoardMember(i32),
    /// Member of the workspace owning the list's board.
    ListMember(i32),
    /// Member of the workspace owning the card's board.
    CardMember(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the logged in user if every permission holds.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user holding all permissions
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session refers to a deleted account
    /// - `Err(AppError::NotFound)` - A resource named by a permission does not exist
    /// - `Err(AuthError::AccessDenied)` - The first permission that does not hold
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            self.check(user.id, *permission).await?;
        }

        Ok(user)
    }

    async fn check(&self, user_id: i32, permission: Permission) -> Result<(), AppError> {
        match permission {
            Permission::WorkspaceMember(workspace_id) => {
                self.require_right(user_id, workspace_id, None).await
            }
            Permission::WorkspaceAdmin(workspace_id) => {
                self.require_right(user_id, workspace_id, Some(MemberRight::Admin))
                    .await
            }
            Permission::CreateBoard(workspace_id) => {
                self.require_right(user_id, workspace_id, Some(MemberRight::CreateBoard))
                    .await
            }
            Permission::DeleteBoard(workspace_id) => {
                self.require_right(user_id, workspace_id, Some(MemberRight::DeleteBoard))
                    .await
            }
            Permission::Invite(workspace_id) => {
                self.require_right(user_id, workspace_id, Some(MemberRight::Invite))
                    .await
            }
            Permission::WorkspaceCreator(workspace_id) => {
                let workspace = WorkspaceRepository::new(self.db)
                    .find_by_id(workspace_id)
                    .await?
                    .ok_or_else(|| {
                        AppError::NotFound(format!("Workspace {} not found", workspace_id))
                    })?;

                if workspace.creator_id != user_id {
                    return Err(AuthError::AccessDenied(
                        user_id,
                        format!("User is not the creator of workspace {}", workspace_id),
                    )
                    .into());
                }

                Ok(())
            }
            Permission::BoardMember(board_id) => {
                let workspace_id = self.board_workspace(board_id).await?;
                self.require_right(user_id, workspace_id, None).await
            }
            Permission::ListMember(list_id) => {
                let board_id = self.list_board(list_id).await?;
                let workspace_id = self.board_workspace(board_id).await?;
                self.require_right(user_id, workspace_id, None).await
            }
            Permission::CardMember(card_id) => {
                let card = CardRepository::new(self.db)
                    .find_by_id(card_id)
                    .await?
                    .ok_or_else(|| AppError::NotFound(format!("Card {} not found", card_id)))?;
                let board_id = self.list_board(card.list_id).await?;
                let workspace_id = self.board_workspace(board_id).await?;
                self.require_right(user_id, workspace_id, None).await
            }
        }
    }

    /// Checks membership of a workspace, and `right` when given.
    async fn require_right(
        &self,
        user_id: i32,
        workspace_id: i32,
        right: Option<MemberRight>,
    ) -> Result<(), AppError> {
        let member = MemberRepository::new(self.db)
            .find(workspace_id, user_id)
            .await?;

        let Some(member) = member else {
            if WorkspaceRepository::new(self.db)
                .find_by_id(workspace_id)
                .await?
                .is_none()
            {
                return Err(AppError::NotFound(format!(
                    "Workspace {} not found",
                    workspace_id
                )));
            }

            return Err(AuthError::AccessDenied(
                user_id,
                format!("User is not a member of workspace {}", workspace_id),
            )
            .into());
        };

        if let Some(right) = right {
            if !member.has(right) {
                return Err(AuthError::AccessDenied(
                    user_id,
                    format!(
                        "User lacks the {} right in workspace {}",
                        right.describe(),
                        workspace_id
                    ),
                )
                .into());
            }
        }

        Ok(())
    }

    async fn board_workspace(&self, board_id: i32) -> Result<i32, AppError> {
        let board = BoardRepository::new(self.db)
            .find_by_id(board_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Board {} not found", board_id)))?;

        Ok(board.workspace_id)
    }

    async fn list_board(&self, list_id: i32) -> Result<i32, AppError> {
        let list = BoardListRepository::new(self.db)
            .find_by_id(list_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("List {} not found", list_id)))?;

        Ok(list.board_id)
    }
}

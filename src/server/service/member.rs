use sea_orm::DatabaseConnection;

use crate::server::{
    data::{member::MemberRepository, workspace::WorkspaceRepository},
    error::AppError,
    model::member::{Member, MemberRight},
};

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_workspace(&self, workspace_id: i32) -> Result<Vec<Member>, AppError> {
        Ok(MemberRepository::new(self.db)
            .get_by_workspace(workspace_id)
            .await?)
    }

    pub async fn get(&self, workspace_id: i32, user_id: i32) -> Result<Member, AppError> {
        MemberRepository::new(self.db)
            .find(workspace_id, user_id)
            .await?
            .ok_or_else(|| not_a_member(workspace_id, user_id))
    }

    /// Flips one right of a member.
    ///
    /// # Returns
    /// - `Ok(Member)` - Member with the flag inverted
    /// - `Err(AppError::NotFound)` - `user_id` is not a member
    /// - `Err(AppError::Forbidden)` - Removing the creator's admin flag
    pub async fn toggle_right(
        &self,
        workspace_id: i32,
        user_id: i32,
        right: MemberRight,
    ) -> Result<Member, AppError> {
        let member_repo = MemberRepository::new(self.db);

        let member = member_repo
            .find(workspace_id, user_id)
            .await?
            .ok_or_else(|| not_a_member(workspace_id, user_id))?;

        let current = match right {
            MemberRight::Admin => member.admin,
            MemberRight::CreateBoard => member.can_create_board,
            MemberRight::DeleteBoard => member.can_delete_board,
            MemberRight::Invite => member.can_invite,
        };

        if right == MemberRight::Admin && current && self.is_creator(workspace_id, user_id).await? {
            return Err(AppError::Forbidden(
                "The workspace creator cannot lose the admin right".to_string(),
            ));
        }

        member_repo
            .set_right(workspace_id, user_id, right, !current)
            .await?
            .ok_or_else(|| not_a_member(workspace_id, user_id))
    }

    /// Removes `user_id` from the workspace on behalf of `acting_user_id`.
    ///
    /// Admins may remove anyone except the creator. Other members may only leave.
    pub async fn remove(
        &self,
        workspace_id: i32,
        user_id: i32,
        acting_user_id: i32,
    ) -> Result<(), AppError> {
        let member_repo = MemberRepository::new(self.db);

        if acting_user_id != user_id {
            let acting = member_repo
                .find(workspace_id, acting_user_id)
                .await?
                .ok_or_else(|| not_a_member(workspace_id, acting_user_id))?;
            if !acting.has(MemberRight::Admin) {
                return Err(AppError::Forbidden(
                    "Only admins can remove other members".to_string(),
                ));
            }
        }

        if self.is_creator(workspace_id, user_id).await? {
            return Err(AppError::Forbidden(
                "The workspace creator cannot be removed".to_string(),
            ));
        }

        if !member_repo.delete(workspace_id, user_id).await? {
            return Err(not_a_member(workspace_id, user_id));
        }

        Ok(())
    }

    async fn is_creator(&self, workspace_id: i32, user_id: i32) -> Result<bool, AppError> {
        let workspace = WorkspaceRepository::new(self.db)
            .find_by_id(workspace_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Workspace {} not found", workspace_id)))?;

        Ok(workspace.creator_id == user_id)
    }
}

fn not_a_member(workspace_id: i32, user_id: i32) -> AppError {
    AppError::NotFound(format!(
        "User {} is not a member of workspace {}",
        user_id, workspace_id
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    /// Expected: each toggle flips the flag
    #[tokio::test]
    async fn toggles_right_back_and_forth() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_workspace_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let owner = factory::user::create_user(db).await?;
        let user = factory::user::create_user(db).await?;
        let workspace = factory::workspace::create_workspace(db, owner.id).await?;
        factory::member::create_member(db, workspace.id, user.id).await?;
        let service = MemberService::new(db);

        let granted = service
            .toggle_right(workspace.id, user.id, MemberRight::CreateBoard)
            .await?;
        let revoked = service
            .toggle_right(workspace.id, user.id, MemberRight::CreateBoard)
            .await?;

        assert!(granted.can_create_board);
        assert!(!revoked.can_create_board);

        Ok(())
    }

    /// Expected: Err(AppError::Forbidden) for the creator's admin flag and removal
    #[tokio::test]
    async fn protects_creator() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_workspace_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let owner = factory::user::create_user(db).await?;
        let admin = factory::user::create_user(db).await?;
        let workspace = factory::workspace::create_workspace(db, owner.id).await?;
        factory::member::MemberFactory::new(db, workspace.id, admin.id)
            .admin(true)
            .build()
            .await?;
        let service = MemberService::new(db);

        let demote = service
            .toggle_right(workspace.id, owner.id, MemberRight::Admin)
            .await;
        let remove = service.remove(workspace.id, owner.id, admin.id).await;

        assert!(matches!(demote, Err(AppError::Forbidden(_))));
        assert!(matches!(remove, Err(AppError::Forbidden(_))));

        Ok(())
    }

    /// Expected: members can leave, but cannot remove others without admin
    #[tokio::test]
    async fn removes_members_by_role() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_workspace_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let owner = factory::user::create_user(db).await?;
        let first = factory::user::create_user(db).await?;
        let second = factory::user::create_user(db).await?;
        let workspace = factory::workspace::create_workspace(db, owner.id).await?;
        factory::member::create_member(db, workspace.id, first.id).await?;
        factory::member::create_member(db, workspace.id, second.id).await?;
        let service = MemberService::new(db);

        let kicked = service.remove(workspace.id, second.id, first.id).await;
        assert!(matches!(kicked, Err(AppError::Forbidden(_))));

        service.remove(workspace.id, first.id, first.id).await?;
        service.remove(workspace.id, second.id, owner.id).await?;

        let remaining = service.get_by_workspace(workspace.id).await?;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].user_id, owner.id);

        Ok(())
    }
}

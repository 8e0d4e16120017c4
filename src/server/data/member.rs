use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::member::{Member, MemberRight};

pub struct MemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds `user_id` to the workspace without any right.
    pub async fn create(&self, workspace_id: i32, user_id: i32) -> Result<Member, DbErr> {
        entity::workspace_member::ActiveModel {
            workspace_id: ActiveValue::Set(workspace_id),
            user_id: ActiveValue::Set(user_id),
            admin: ActiveValue::Set(false),
            can_create_board: ActiveValue::Set(false),
            can_delete_board: ActiveValue::Set(false),
            can_invite: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.find(workspace_id, user_id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Member {} of workspace {} not found after creation",
                user_id, workspace_id
            )))
    }

    /// Finds the membership of `user_id` in a workspace.
    pub async fn find(&self, workspace_id: i32, user_id: i32) -> Result<Option<Member>, DbErr> {
        let result = entity::prelude::WorkspaceMember::find()
            .filter(entity::workspace_member::Column::WorkspaceId.eq(workspace_id))
            .filter(entity::workspace_member::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(match result {
            Some((member, Some(user))) => Some(Member::from_entity(member, user)),
            _ => None,
        })
    }

    pub async fn is_member(&self, workspace_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::WorkspaceMember::find()
            .filter(entity::workspace_member::Column::WorkspaceId.eq(workspace_id))
            .filter(entity::workspace_member::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets every member of a workspace in joining order.
    pub async fn get_by_workspace(&self, workspace_id: i32) -> Result<Vec<Member>, DbErr> {
        let results = entity::prelude::WorkspaceMember::find()
            .filter(entity::workspace_member::Column::WorkspaceId.eq(workspace_id))
            .order_by_asc(entity::workspace_member::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok(results
            .into_iter()
            .filter_map(|(member, user)| user.map(|u| Member::from_entity(member, u)))
            .collect())
    }

    /// Sets a single right flag of a membership.
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - Updated membership
    /// - `Ok(None)` - `user_id` is not a member of the workspace
    pub async fn set_right(
        &self,
        workspace_id: i32,
        user_id: i32,
        right: MemberRight,
        value: bool,
    ) -> Result<Option<Member>, DbErr> {
        let Some(existing) = entity::prelude::WorkspaceMember::find()
            .filter(entity::workspace_member::Column::WorkspaceId.eq(workspace_id))
            .filter(entity::workspace_member::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::workspace_member::ActiveModel = existing.into();
        match right {
            MemberRight::Admin => active.admin = ActiveValue::Set(value),
            MemberRight::CreateBoard => active.can_create_board = ActiveValue::Set(value),
            MemberRight::DeleteBoard => active.can_delete_board = ActiveValue::Set(value),
            MemberRight::Invite => active.can_invite = ActiveValue::Set(value),
        }
        active.update(self.db).await?;

        self.find(workspace_id, user_id).await
    }

    pub async fn delete(&self, workspace_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::WorkspaceMember::delete_many()
            .filter(entity::workspace_member::Column::WorkspaceId.eq(workspace_id))
            .filter(entity::workspace_member::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

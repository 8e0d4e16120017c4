use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::invitation::Invitation;

pub struct InvitationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InvitationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, workspace_id: i32, user_id: i32) -> Result<Invitation, DbErr> {
        let invitation = entity::workspace_invitation::ActiveModel {
            workspace_id: ActiveValue::Set(workspace_id),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.find_by_id(invitation.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Invitation {} not found after creation",
                invitation.id
            )))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Invitation>, DbErr> {
        let result = entity::prelude::WorkspaceInvitation::find_by_id(id)
            .find_also_related(entity::prelude::Workspace)
            .one(self.db)
            .await?;

        Ok(match result {
            Some((invitation, Some(workspace))) => {
                Some(Invitation::from_entity(invitation, workspace))
            }
            _ => None,
        })
    }

    /// Whether `user_id` already holds a pending invitation to the workspace.
    pub async fn exists(&self, workspace_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::WorkspaceInvitation::find()
            .filter(entity::workspace_invitation::Column::WorkspaceId.eq(workspace_id))
            .filter(entity::workspace_invitation::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets the pending invitations addressed to `user_id`, newest first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Invitation>, DbErr> {
        let results = entity::prelude::WorkspaceInvitation::find()
            .filter(entity::workspace_invitation::Column::UserId.eq(user_id))
            .order_by_desc(entity::workspace_invitation::Column::Id)
            .find_also_related(entity::prelude::Workspace)
            .all(self.db)
            .await?;

        Ok(into_invitations(results))
    }

    /// Gets the pending invitations of a workspace, newest first.
    pub async fn get_by_workspace(&self, workspace_id: i32) -> Result<Vec<Invitation>, DbErr> {
        let results = entity::prelude::WorkspaceInvitation::find()
            .filter(entity::workspace_invitation::Column::WorkspaceId.eq(workspace_id))
            .order_by_desc(entity::workspace_invitation::Column::Id)
            .find_also_related(entity::prelude::Workspace)
            .all(self.db)
            .await?;

        Ok(into_invitations(results))
    }

    /// Turns an invitation into a membership without rights.
    ///
    /// The member insert and the invitation delete share one transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - Invitation accepted
    /// - `Ok(false)` - No invitation with this ID
    pub async fn accept(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let Some(invitation) = entity::prelude::WorkspaceInvitation::find_by_id(id)
            .one(&txn)
            .await?
        else {
            return Ok(false);
        };

        entity::workspace_member::ActiveModel {
            workspace_id: ActiveValue::Set(invitation.workspace_id),
            user_id: ActiveValue::Set(invitation.user_id),
            admin: ActiveValue::Set(false),
            can_create_board: ActiveValue::Set(false),
            can_delete_board: ActiveValue::Set(false),
            can_invite: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        entity::prelude::WorkspaceInvitation::delete_by_id(id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(true)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::WorkspaceInvitation::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

fn into_invitations(
    results: Vec<(
        entity::workspace_invitation::Model,
        Option<entity::workspace::Model>,
    )>,
) -> Vec<Invitation> {
    results
        .into_iter()
        .filter_map(|(invitation, workspace)| {
            workspace.map(|w| Invitation::from_entity(invitation, w))
        })
        .collect()
}

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, TransactionTrait,
};

use crate::server::model::workspace::{CreateWorkspaceParams, UpdateWorkspaceParams, Workspace};

pub struct WorkspaceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WorkspaceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a workspace and makes its creator a member holding every right.
    ///
    /// Both rows are written in one transaction.
    pub async fn create(&self, params: CreateWorkspaceParams) -> Result<Workspace, DbErr> {
        let txn = self.db.begin().await?;

        let workspace = entity::workspace::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            favicon_url: ActiveValue::Set(params.favicon_url),
            creator_id: ActiveValue::Set(params.creator_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        entity::workspace_member::ActiveModel {
            workspace_id: ActiveValue::Set(workspace.id),
            user_id: ActiveValue::Set(params.creator_id),
            admin: ActiveValue::Set(true),
            can_create_board: ActiveValue::Set(true),
            can_delete_board: ActiveValue::Set(true),
            can_invite: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(Workspace::from_entity(workspace))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Workspace>, DbErr> {
        let entity = entity::prelude::Workspace::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Workspace::from_entity))
    }

    /// Gets the workspaces `user_id` is a member of, oldest first.
    pub async fn get_by_member(&self, user_id: i32) -> Result<Vec<Workspace>, DbErr> {
        let entities = entity::prelude::Workspace::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::workspace::Relation::WorkspaceMember.def(),
            )
            .filter(entity::workspace_member::Column::UserId.eq(user_id))
            .order_by_asc(entity::workspace::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Workspace::from_entity).collect())
    }

    /// Applies the provided fields of `params`.
    ///
    /// # Returns
    /// - `Ok(Some(Workspace))` - The updated workspace
    /// - `Ok(None)` - No workspace with this ID
    pub async fn update(&self, params: UpdateWorkspaceParams) -> Result<Option<Workspace>, DbErr> {
        let Some(existing) = entity::prelude::Workspace::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::workspace::ActiveModel = existing.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(favicon_url) = params.favicon_url {
            active.favicon_url = ActiveValue::Set(Some(favicon_url));
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Workspace::from_entity(entity)))
    }

    /// Deletes a workspace together with everything it contains.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Workspace::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250901_000001_create_user_table::User, m20250901_000002_create_workspace_table::Workspace,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkspaceInvitation::Table)
                    .if_not_exists()
                    .col(pk_auto(WorkspaceInvitation::Id))
                    .col(integer(WorkspaceInvitation::WorkspaceId))
                    .col(integer(WorkspaceInvitation::UserId))
                    .col(timestamp_with_time_zone(WorkspaceInvitation::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_workspace_invitation_workspace_id")
                            .from(WorkspaceInvitation::Table, WorkspaceInvitation::WorkspaceId)
                            .to(Workspace::Table, Workspace::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_workspace_invitation_user_id")
                            .from(WorkspaceInvitation::Table, WorkspaceInvitation::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("idx_workspace_invitation_unique")
                            .col(WorkspaceInvitation::WorkspaceId)
                            .col(WorkspaceInvitation::UserId)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkspaceInvitation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WorkspaceInvitation {
    Table,
    Id,
    WorkspaceId,
    UserId,
    CreatedAt,
}

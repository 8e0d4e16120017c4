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
                    .table(WorkspaceMember::Table)
                    .if_not_exists()
                    .col(pk_auto(WorkspaceMember::Id))
                    .col(integer(WorkspaceMember::WorkspaceId))
                    .col(integer(WorkspaceMember::UserId))
                    .col(boolean(WorkspaceMember::Admin).default(false))
                    .col(boolean(WorkspaceMember::CanCreateBoard).default(false))
                    .col(boolean(WorkspaceMember::CanDeleteBoard).default(false))
                    .col(boolean(WorkspaceMember::CanInvite).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_workspace_member_workspace_id")
                            .from(WorkspaceMember::Table, WorkspaceMember::WorkspaceId)
                            .to(Workspace::Table, Workspace::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_workspace_member_user_id")
                            .from(WorkspaceMember::Table, WorkspaceMember::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("idx_workspace_member_unique")
                            .col(WorkspaceMember::WorkspaceId)
                            .col(WorkspaceMember::UserId)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkspaceMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WorkspaceMember {
    Table,
    Id,
    WorkspaceId,
    UserId,
    Admin,
    CanCreateBoard,
    CanDeleteBoard,
    CanInvite,
}

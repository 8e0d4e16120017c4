use sea_orm_migration::{prelude::*, schema::*};

use super::m20250901_000002_create_workspace_table::Workspace;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Board::Table)
                    .if_not_exists()
                    .col(pk_auto(Board::Id))
                    .col(integer(Board::WorkspaceId))
                    .col(string(Board::Name))
                    .col(string(Board::BackgroundColor))
                    .col(integer(Board::ListNb).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_board_workspace_id")
                            .from(Board::Table, Board::WorkspaceId)
                            .to(Workspace::Table, Workspace::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Board::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Board {
    Table,
    Id,
    WorkspaceId,
    Name,
    BackgroundColor,
    ListNb,
}

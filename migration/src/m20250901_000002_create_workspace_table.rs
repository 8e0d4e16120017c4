use sea_orm_migration::{prelude::*, schema::*};

use super::m20250901_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Workspace::Table)
                    .if_not_exists()
                    .col(pk_auto(Workspace::Id))
                    .col(string(Workspace::Name))
                    .col(text(Workspace::Description))
                    .col(string_null(Workspace::FaviconUrl))
                    .col(integer(Workspace::CreatorId))
                    .col(timestamp_with_time_zone(Workspace::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_workspace_creator_id")
                            .from(Workspace::Table, Workspace::CreatorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Workspace::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Workspace {
    Table,
    Id,
    Name,
    Description,
    FaviconUrl,
    CreatorId,
    CreatedAt,
}

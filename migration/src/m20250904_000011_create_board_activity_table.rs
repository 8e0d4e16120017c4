use sea_orm_migration::{prelude::*, schema::*};

use super::m20250902_000005_create_board_table::Board;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BoardActivity::Table)
                    .if_not_exists()
                    .col(pk_auto(BoardActivity::Id))
                    .col(integer(BoardActivity::BoardId))
                    .col(text(BoardActivity::Message))
                    .col(timestamp_with_time_zone(BoardActivity::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_board_activity_board_id")
                            .from(BoardActivity::Table, BoardActivity::BoardId)
                            .to(Board::Table, Board::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BoardActivity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BoardActivity {
    Table,
    Id,
    BoardId,
    Message,
    CreatedAt,
}

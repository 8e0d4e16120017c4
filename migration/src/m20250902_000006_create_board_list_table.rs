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
                    .table(BoardList::Table)
                    .if_not_exists()
                    .col(pk_auto(BoardList::Id))
                    .col(integer(BoardList::BoardId))
                    .col(string(BoardList::Name))
                    .col(integer(BoardList::Position))
                    .col(integer(BoardList::CardNb).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_board_list_board_id")
                            .from(BoardList::Table, BoardList::BoardId)
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
            .drop_table(Table::drop().table(BoardList::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BoardList {
    Table,
    Id,
    BoardId,
    Name,
    Position,
    CardNb,
}

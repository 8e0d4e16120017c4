use sea_orm_migration::{prelude::*, schema::*};

use super::m20250902_000006_create_board_list_table::BoardList;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Card::Table)
                    .if_not_exists()
                    .col(pk_auto(Card::Id))
                    .col(integer(Card::ListId))
                    .col(string(Card::Name))
                    .col(text(Card::Description))
                    .col(timestamp_with_time_zone_null(Card::DateEnd))
                    .col(integer(Card::Position))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_card_list_id")
                            .from(Card::Table, Card::ListId)
                            .to(BoardList::Table, BoardList::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Card::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Card {
    Table,
    Id,
    ListId,
    Name,
    Description,
    DateEnd,
    Position,
}

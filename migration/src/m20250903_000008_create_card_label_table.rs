use sea_orm_migration::{prelude::*, schema::*};

use super::m20250902_000007_create_card_table::Card;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CardLabel::Table)
                    .if_not_exists()
                    .col(pk_auto(CardLabel::Id))
                    .col(integer(CardLabel::CardId))
                    .col(string(CardLabel::Title))
                    .col(string(CardLabel::Color))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_card_label_card_id")
                            .from(CardLabel::Table, CardLabel::CardId)
                            .to(Card::Table, Card::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CardLabel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CardLabel {
    Table,
    Id,
    CardId,
    Title,
    Color,
}

use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250901_000001_create_user_table::User, m20250902_000007_create_card_table::Card,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CardAssignee::Table)
                    .if_not_exists()
                    .col(pk_auto(CardAssignee::Id))
                    .col(integer(CardAssignee::CardId))
                    .col(integer(CardAssignee::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_card_assignee_card_id")
                            .from(CardAssignee::Table, CardAssignee::CardId)
                            .to(Card::Table, Card::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_card_assignee_user_id")
                            .from(CardAssignee::Table, CardAssignee::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("idx_card_assignee_unique")
                            .col(CardAssignee::CardId)
                            .col(CardAssignee::UserId)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CardAssignee::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CardAssignee {
    Table,
    Id,
    CardId,
    UserId,
}

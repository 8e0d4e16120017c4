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
                    .table(VerificationCode::Table)
                    .if_not_exists()
                    .col(pk_auto(VerificationCode::Id))
                    .col(integer_uniq(VerificationCode::UserId))
                    .col(string(VerificationCode::Code))
                    .col(integer(VerificationCode::Attempts).default(0))
                    .col(timestamp_with_time_zone(VerificationCode::ExpiresAt))
                    .col(timestamp_with_time_zone(VerificationCode::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_verification_code_user_id")
                            .from(VerificationCode::Table, VerificationCode::UserId)
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
            .drop_table(Table::drop().table(VerificationCode::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum VerificationCode {
    Table,
    Id,
    UserId,
    Code,
    Attempts,
    ExpiresAt,
    CreatedAt,
}

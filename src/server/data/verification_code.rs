//! Verification code repository.
//!
//! A user holds at most one pending code. Requesting a new one replaces it.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, TransactionTrait,
};

use crate::server::model::verification_code::VerificationCode;

pub struct VerificationCodeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VerificationCodeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores `code` for `user_id`, dropping any code the user already had.
    pub async fn replace(
        &self,
        user_id: i32,
        code: String,
        expires_at: DateTime<Utc>,
    ) -> Result<VerificationCode, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::VerificationCode::delete_many()
            .filter(entity::verification_code::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;

        let entity = entity::verification_code::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            code: ActiveValue::Set(code),
            attempts: ActiveValue::Set(0),
            expires_at: ActiveValue::Set(expires_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(VerificationCode::from_entity(entity))
    }

    pub async fn find_by_user(&self, user_id: i32) -> Result<Option<VerificationCode>, DbErr> {
        let entity = entity::prelude::VerificationCode::find()
            .filter(entity::verification_code::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(VerificationCode::from_entity))
    }

    /// Counts one more wrong code against the pending code `id`.
    ///
    /// # Returns
    /// - `Ok(Some(i32))` - Wrong attempts so far
    /// - `Ok(None)` - The code no longer exists
    pub async fn record_failed_attempt(&self, id: i32) -> Result<Option<i32>, DbErr> {
        let Some(existing) = entity::prelude::VerificationCode::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let attempts = existing.attempts + 1;
        let mut active: entity::verification_code::ActiveModel = existing.into();
        active.attempts = ActiveValue::Set(attempts);
        active.update(self.db).await?;

        Ok(Some(attempts))
    }

    /// # Returns
    /// - `Ok(true)` - The user's code was deleted
    /// - `Ok(false)` - The user had no pending code
    pub async fn delete_by_user(&self, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::VerificationCode::delete_many()
            .filter(entity::verification_code::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every code that expired at or before `now`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted codes
    pub async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::VerificationCode::delete_many()
            .filter(entity::verification_code::Column::ExpiresAt.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};
use tower_sessions::session_store::ExpiredDeletion;
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{data::verification_code::VerificationCodeRepository, error::AppError};

/// Starts the maintenance scheduler.
///
/// Every run deletes expired sessions, including abandoned OAuth logins holding only a
/// CSRF state, and expired password reset codes. A failing purge is logged and does
/// not stop the other one.
///
/// # Arguments
/// - `db`: Application database holding the reset codes
/// - `store`: Session store shared with the session layer
/// - `schedule`: Cron expression with seconds, such as `0 */5 * * * *`
pub async fn start_scheduler(
    db: DatabaseConnection,
    store: SqliteStore,
    schedule: &str,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let db = db.clone();
        let store = store.clone();

        Box::pin(async move {
            if let Err(e) = purge_expired_sessions(&store).await {
                tracing::error!("Error purging expired sessions: {}", e);
            }
            if let Err(e) = purge_expired_codes(&db).await {
                tracing::error!("Error purging expired reset codes: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Maintenance scheduler started ({})", schedule);

    Ok(())
}

async fn purge_expired_sessions(store: &SqliteStore) -> Result<(), AppError> {
    store.delete_expired().await?;
    tracing::debug!("Expired sessions purged");

    Ok(())
}

async fn purge_expired_codes(db: &DatabaseConnection) -> Result<u64, AppError> {
    let deleted = VerificationCodeRepository::new(db)
        .delete_expired(Utc::now())
        .await?;

    if deleted > 0 {
        tracing::info!("Purged {} expired reset codes", deleted);
    }

    Ok(deleted)
}

//! PostgreSQL-backed training result ledger.
//!
//! Every statement filters by owner. Reads join the referenced training
//! when it is still active.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use vocal_coach_application::{
    NewTrainingResult, OwnedTrainingResult, TrainingRecord, TrainingResultChanges,
    TrainingResultRecord, TrainingResultRepository,
};
use vocal_coach_core::{AppError, AppResult, UserId};
use vocal_coach_domain::{TrainingId, TrainingResultId};

mod read;
mod write;

#[cfg(test)]
mod tests;

/// Projection shared by every ledger query. Expects the result rows aliased
/// as `r` and the joined training as `t`.
const RESULT_PROJECTION: &str = r#"
    r.id, r.training_id, r.user_id, r.score, r.created_at, r.updated_at, r.version,
    t.id AS training_row_id, t.title AS training_title, t.level AS training_level,
    t.data AS training_data, t.created_at AS training_created_at,
    t.updated_at AS training_updated_at, t.version AS training_version
"#;

/// PostgreSQL implementation of the training result repository port.
#[derive(Clone)]
pub struct PostgresTrainingResultRepository {
    pool: PgPool,
}

impl PostgresTrainingResultRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct TrainingResultRow {
    id: i64,
    training_id: i64,
    user_id: i64,
    score: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    version: i32,
    training_row_id: Option<i64>,
    training_title: Option<String>,
    training_level: Option<i32>,
    training_data: Option<String>,
    training_created_at: Option<DateTime<Utc>>,
    training_updated_at: Option<DateTime<Utc>>,
    training_version: Option<i32>,
}

impl From<TrainingResultRow> for TrainingResultRecord {
    fn from(row: TrainingResultRow) -> Self {
        let training = match (
            row.training_row_id,
            row.training_title,
            row.training_level,
            row.training_data,
            row.training_created_at,
            row.training_updated_at,
            row.training_version,
        ) {
            (
                Some(id),
                Some(title),
                Some(level),
                Some(data),
                Some(created_at),
                Some(updated_at),
                Some(version),
            ) => Some(TrainingRecord {
                id: TrainingId::new(id),
                title,
                level,
                data,
                created_at,
                updated_at,
                version,
            }),
            _ => None,
        };

        Self {
            id: TrainingResultId::new(row.id),
            training_id: TrainingId::new(row.training_id),
            user_id: UserId::new(row.user_id),
            score: row.score,
            created_at: row.created_at,
            updated_at: row.updated_at,
            version: row.version,
            training,
        }
    }
}

#[async_trait]
impl TrainingResultRepository for PostgresTrainingResultRepository {
    async fn create(&self, result: NewTrainingResult) -> AppResult<TrainingResultRecord> {
        self.create_impl(result).await
    }

    async fn find_for_owner(
        &self,
        result_id: TrainingResultId,
        owner: UserId,
    ) -> AppResult<Option<TrainingResultRecord>> {
        self.find_for_owner_impl(result_id, owner).await
    }

    async fn list_for_owner(&self, owner: UserId) -> AppResult<Vec<TrainingResultRecord>> {
        self.list_for_owner_impl(owner, None).await
    }

    async fn list_for_owner_by_training(
        &self,
        owner: UserId,
        training_id: TrainingId,
    ) -> AppResult<Vec<TrainingResultRecord>> {
        self.list_for_owner_impl(owner, Some(training_id)).await
    }

    async fn update_owned(
        &self,
        result: &OwnedTrainingResult,
        changes: TrainingResultChanges,
    ) -> AppResult<Option<TrainingResultRecord>> {
        self.update_owned_impl(result, changes).await
    }

    async fn delete_owned(&self, result: OwnedTrainingResult) -> AppResult<bool> {
        self.delete_owned_impl(result).await
    }
}

fn internal(operation: &str, error: sqlx::Error) -> AppError {
    AppError::Internal(format!("failed to {operation}: {error}"))
}

//! PostgreSQL-backed training catalog repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use vocal_coach_application::{NewTraining, TrainingChanges, TrainingRecord, TrainingRepository};
use vocal_coach_core::{AppError, AppResult, NonEmptyString};
use vocal_coach_domain::TrainingId;


/// PostgreSQL implementation of the training repository port.
#[derive(Clone)]
pub struct PostgresTrainingRepository {
    pool: PgPool,
}

impl PostgresTrainingRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct TrainingRow {
    id: i64,
    title: String,
    level: i32,
    data: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    version: i32,
}

impl From<TrainingRow> for TrainingRecord {
    fn from(row: TrainingRow) -> Self {
        Self {
            id: TrainingId::new(row.id),
            title: row.title,
            level: row.level,
            data: row.data,
            created_at: row.created_at,
            updated_at: row.updated_at,
            version: row.version,
        }
    }
}

#[async_trait]
impl TrainingRepository for PostgresTrainingRepository {
    async fn create(&self, training: NewTraining) -> AppResult<TrainingRecord> {
        let row = sqlx::query_as::<_, TrainingRow>(
            r#"
            INSERT INTO trainings (title, level, data)
            VALUES ($1, $2, $3)
            RETURNING id, title, level, data, created_at, updated_at, version
            "#,
        )
        .bind(training.title.as_str())
        .bind(training.level)
        .bind(training.data.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to create training: {error}")))?;

        Ok(row.into())
    }

    async fn find_by_id(&self, training_id: TrainingId) -> AppResult<Option<TrainingRecord>> {
        let row = sqlx::query_as::<_, TrainingRow>(
            r#"
            SELECT id, title, level, data, created_at, updated_at, version
            FROM trainings
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(training_id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to find training: {error}")))?;

        Ok(row.map(TrainingRecord::from))
    }

    async fn list(&self) -> AppResult<Vec<TrainingRecord>> {
        let rows = sqlx::query_as::<_, TrainingRow>(
            r#"
            SELECT id, title, level, data, created_at, updated_at, version
            FROM trainings
            WHERE deleted_at IS NULL
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list trainings: {error}")))?;

        Ok(rows.into_iter().map(TrainingRecord::from).collect())
    }

    async fn update(
        &self,
        training_id: TrainingId,
        changes: TrainingChanges,
    ) -> AppResult<Option<TrainingRecord>> {
        let row = sqlx::query_as::<_, TrainingRow>(
            r#"
            UPDATE trainings
            SET title = COALESCE($2, title),
                level = COALESCE($3, level),
                data = COALESCE($4, data),
                version = version + 1,
                updated_at = now()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING id, title, level, data, created_at, updated_at, version
            "#,
        )
        .bind(training_id.as_i64())
        .bind(changes.title.as_ref().map(NonEmptyString::as_str))
        .bind(changes.level)
        .bind(changes.data.as_ref().map(NonEmptyString::as_str))
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to update training: {error}")))?;

        Ok(row.map(TrainingRecord::from))
    }

    async fn soft_delete(&self, training_id: TrainingId) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE trainings
            SET deleted_at = now(), updated_at = now(), version = version + 1
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(training_id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to delete training: {error}")))?;

        Ok(result.rows_affected() > 0)
    }
}

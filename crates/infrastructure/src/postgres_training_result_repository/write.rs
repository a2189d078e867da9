use super::*;

impl PostgresTrainingResultRepository {
    pub(super) async fn create_impl(
        &self,
        result: NewTrainingResult,
    ) -> AppResult<TrainingResultRecord> {
        let sql = format!(
            r#"
            WITH r AS (
                INSERT INTO training_results (training_id, user_id, score)
                VALUES ($1, $2, $3)
                RETURNING *
            )
            SELECT {RESULT_PROJECTION}
            FROM r
            LEFT JOIN trainings t ON t.id = r.training_id AND t.deleted_at IS NULL
            "#
        );

        let row = sqlx::query_as::<_, TrainingResultRow>(&sql)
            .bind(result.training_id.as_i64())
            .bind(result.user_id.as_i64())
            .bind(result.score)
            .fetch_one(&self.pool)
            .await
            .map_err(|error| internal("create training result", error))?;

        Ok(row.into())
    }

    pub(super) async fn update_owned_impl(
        &self,
        result: &OwnedTrainingResult,
        changes: TrainingResultChanges,
    ) -> AppResult<Option<TrainingResultRecord>> {
        let sql = format!(
            r#"
            WITH r AS (
                UPDATE training_results
                SET training_id = COALESCE($3, training_id),
                    score = COALESCE($4, score),
                    version = version + 1,
                    updated_at = now()
                WHERE id = $1 AND user_id = $2 AND deleted_at IS NULL
                RETURNING *
            )
            SELECT {RESULT_PROJECTION}
            FROM r
            LEFT JOIN trainings t ON t.id = r.training_id AND t.deleted_at IS NULL
            "#
        );

        let row = sqlx::query_as::<_, TrainingResultRow>(&sql)
            .bind(result.id().as_i64())
            .bind(result.user_id().as_i64())
            .bind(changes.training_id.map(|id| id.as_i64()))
            .bind(changes.score)
            .fetch_optional(&self.pool)
            .await
            .map_err(|error| internal("update training result", error))?;

        Ok(row.map(TrainingResultRecord::from))
    }

    pub(super) async fn delete_owned_impl(&self, result: OwnedTrainingResult) -> AppResult<bool> {
        let outcome = sqlx::query(
            r#"
            UPDATE training_results
            SET deleted_at = now(), updated_at = now(), version = version + 1
            WHERE id = $1 AND user_id = $2 AND deleted_at IS NULL
            "#,
        )
        .bind(result.id().as_i64())
        .bind(result.user_id().as_i64())
        .execute(&self.pool)
        .await
        .map_err(|error| internal("delete training result", error))?;

        Ok(outcome.rows_affected() > 0)
    }
}

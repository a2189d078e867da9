use super::*;

impl PostgresTrainingResultRepository {
    pub(super) async fn find_for_owner_impl(
        &self,
        result_id: TrainingResultId,
        owner: UserId,
    ) -> AppResult<Option<TrainingResultRecord>> {
        let sql = format!(
            r#"
            SELECT {RESULT_PROJECTION}
            FROM training_results r
            LEFT JOIN trainings t ON t.id = r.training_id AND t.deleted_at IS NULL
            WHERE r.id = $1 AND r.user_id = $2 AND r.deleted_at IS NULL
            "#
        );

        let row = sqlx::query_as::<_, TrainingResultRow>(&sql)
            .bind(result_id.as_i64())
            .bind(owner.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|error| internal("find training result", error))?;

        Ok(row.map(TrainingResultRecord::from))
    }

    /// Lists the owner's results, optionally narrowed to one training.
    pub(super) async fn list_for_owner_impl(
        &self,
        owner: UserId,
        training_id: Option<TrainingId>,
    ) -> AppResult<Vec<TrainingResultRecord>> {
        let sql = format!(
            r#"
            SELECT {RESULT_PROJECTION}
            FROM training_results r
            LEFT JOIN trainings t ON t.id = r.training_id AND t.deleted_at IS NULL
            WHERE r.user_id = $1
              AND ($2::BIGINT IS NULL OR r.training_id = $2)
              AND r.deleted_at IS NULL
            ORDER BY r.id
            "#
        );

        let rows = sqlx::query_as::<_, TrainingResultRow>(&sql)
            .bind(owner.as_i64())
            .bind(training_id.map(|id| id.as_i64()))
            .fetch_all(&self.pool)
            .await
            .map_err(|error| internal("list training results", error))?;

        Ok(rows.into_iter().map(TrainingResultRecord::from).collect())
    }
}

use async_trait::async_trait;
use chrono::Utc;
use vocal_coach_application::{
    NewTrainingResult, OwnedTrainingResult, TrainingResultChanges, TrainingResultRecord,
    TrainingResultRepository,
};
use vocal_coach_core::{AppResult, UserId};
use vocal_coach_domain::{TrainingId, TrainingResultId};

use super::{InMemoryRepository, Stored, next_key};

impl InMemoryRepository {
    /// Attaches the referenced training when it is still active.
    async fn with_training(&self, mut result: TrainingResultRecord) -> TrainingResultRecord {
        result.training = self.active_training(result.training_id).await;
        result
    }

    async fn owned_results(
        &self,
        owner: UserId,
        predicate: impl Fn(&TrainingResultRecord) -> bool,
    ) -> Vec<TrainingResultRecord> {
        let matching: Vec<TrainingResultRecord> = self
            .training_results
            .read()
            .await
            .values()
            .filter(|stored| {
                stored.is_active() && stored.record.user_id == owner && predicate(&stored.record)
            })
            .map(|stored| stored.record.clone())
            .collect();

        let mut joined = Vec::with_capacity(matching.len());
        for result in matching {
            joined.push(self.with_training(result).await);
        }
        joined
    }
}

#[async_trait]
impl TrainingResultRepository for InMemoryRepository {
    async fn create(&self, result: NewTrainingResult) -> AppResult<TrainingResultRecord> {
        let record = {
            let mut results = self.training_results.write().await;
            let id = next_key(&results);
            let now = Utc::now();
            let record = TrainingResultRecord {
                id: TrainingResultId::new(id),
                training_id: result.training_id,
                user_id: result.user_id,
                score: result.score,
                created_at: now,
                updated_at: now,
                version: 1,
                training: None,
            };
            results.insert(id, Stored::active(record.clone()));
            record
        };

        Ok(self.with_training(record).await)
    }

    async fn find_for_owner(
        &self,
        result_id: TrainingResultId,
        owner: UserId,
    ) -> AppResult<Option<TrainingResultRecord>> {
        Ok(self
            .owned_results(owner, |result| result.id == result_id)
            .await
            .into_iter()
            .next())
    }

    async fn list_for_owner(&self, owner: UserId) -> AppResult<Vec<TrainingResultRecord>> {
        Ok(self.owned_results(owner, |_| true).await)
    }

    async fn list_for_owner_by_training(
        &self,
        owner: UserId,
        training_id: TrainingId,
    ) -> AppResult<Vec<TrainingResultRecord>> {
        Ok(self
            .owned_results(owner, |result| result.training_id == training_id)
            .await)
    }

    async fn update_owned(
        &self,
        owned: &OwnedTrainingResult,
        changes: TrainingResultChanges,
    ) -> AppResult<Option<TrainingResultRecord>> {
        let updated = {
            let mut results = self.training_results.write().await;
            let Some(stored) = results
                .get_mut(&owned.id().as_i64())
                .filter(|stored| stored.is_active() && stored.record.user_id == owned.user_id())
            else {
                return Ok(None);
            };

            let result = &mut stored.record;
            if let Some(training_id) = changes.training_id {
                result.training_id = training_id;
            }
            if let Some(score) = changes.score {
                result.score = score;
            }
            result.version += 1;
            result.updated_at = Utc::now();
            result.clone()
        };

        Ok(Some(self.with_training(updated).await))
    }

    async fn delete_owned(&self, owned: OwnedTrainingResult) -> AppResult<bool> {
        let mut results = self.training_results.write().await;
        let Some(stored) = results
            .get_mut(&owned.id().as_i64())
            .filter(|stored| stored.is_active() && stored.record.user_id == owned.user_id())
        else {
            return Ok(false);
        };

        let now = Utc::now();
        stored.deleted_at = Some(now);
        stored.record.updated_at = now;
        stored.record.version += 1;

        Ok(true)
    }
}

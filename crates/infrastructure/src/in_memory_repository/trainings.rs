use async_trait::async_trait;
use chrono::Utc;
use vocal_coach_application::{NewTraining, TrainingChanges, TrainingRecord, TrainingRepository};
use vocal_coach_core::AppResult;
use vocal_coach_domain::TrainingId;

use super::{InMemoryRepository, Stored, next_key};

#[async_trait]
impl TrainingRepository for InMemoryRepository {
    async fn create(&self, training: NewTraining) -> AppResult<TrainingRecord> {
        let mut trainings = self.trainings.write().await;
        let id = next_key(&trainings);
        let now = Utc::now();
        let record = TrainingRecord {
            id: TrainingId::new(id),
            title: training.title.into(),
            level: training.level,
            data: training.data.into(),
            created_at: now,
            updated_at: now,
            version: 1,
        };
        trainings.insert(id, Stored::active(record.clone()));

        Ok(record)
    }

    async fn find_by_id(&self, training_id: TrainingId) -> AppResult<Option<TrainingRecord>> {
        Ok(self.active_training(training_id).await)
    }

    async fn list(&self) -> AppResult<Vec<TrainingRecord>> {
        Ok(self
            .trainings
            .read()
            .await
            .values()
            .filter(|stored| stored.is_active())
            .map(|stored| stored.record.clone())
            .collect())
    }

    async fn update(
        &self,
        training_id: TrainingId,
        changes: TrainingChanges,
    ) -> AppResult<Option<TrainingRecord>> {
        let mut trainings = self.trainings.write().await;
        let Some(stored) = trainings
            .get_mut(&training_id.as_i64())
            .filter(|stored| stored.is_active())
        else {
            return Ok(None);
        };

        let training = &mut stored.record;
        if let Some(title) = changes.title {
            training.title = title.into();
        }
        if let Some(level) = changes.level {
            training.level = level;
        }
        if let Some(data) = changes.data {
            training.data = data.into();
        }
        training.version += 1;
        training.updated_at = Utc::now();

        Ok(Some(training.clone()))
    }

    async fn soft_delete(&self, training_id: TrainingId) -> AppResult<bool> {
        let mut trainings = self.trainings.write().await;
        let Some(stored) = trainings
            .get_mut(&training_id.as_i64())
            .filter(|stored| stored.is_active())
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

impl InMemoryRepository {
    pub(super) async fn active_training(&self, training_id: TrainingId) -> Option<TrainingRecord> {
        self.trainings
            .read()
            .await
            .get(&training_id.as_i64())
            .filter(|stored| stored.is_active())
            .map(|stored| stored.record.clone())
    }
}

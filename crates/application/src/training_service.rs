//! Training catalog ports and application service.
//!
//! Trainings are shared definitions. Any authenticated caller may create,
//! change or remove them.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;
use vocal_coach_core::{AppError, AppResult, NonEmptyString};
use vocal_coach_domain::TrainingId;

use crate::Found;

#[cfg(test)]
mod tests;

/// Active training record returned by repository queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingRecord {
    /// Unique training identifier.
    pub id: TrainingId,
    /// Program title.
    pub title: String,
    /// Difficulty tier, expected 1 to 3.
    pub level: i32,
    /// Opaque serialized program payload.
    pub data: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Optimistic concurrency counter.
    pub version: i32,
}

/// Validated training fields ready to be persisted.
#[derive(Debug, Clone)]
pub struct NewTraining {
    /// Program title.
    pub title: NonEmptyString,
    /// Difficulty tier.
    pub level: i32,
    /// Opaque serialized program payload.
    pub data: NonEmptyString,
}

/// Validated partial update. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct TrainingChanges {
    /// New title, if provided.
    pub title: Option<NonEmptyString>,
    /// New level, if provided.
    pub level: Option<i32>,
    /// New payload, if provided.
    pub data: Option<NonEmptyString>,
}

/// Repository port for training persistence.
///
/// Soft-deleted trainings are invisible to every method.
#[async_trait::async_trait]
pub trait TrainingRepository: Send + Sync {
    /// Inserts a training and returns the stored row.
    async fn create(&self, training: NewTraining) -> AppResult<TrainingRecord>;

    /// Finds an active training by id.
    async fn find_by_id(&self, training_id: TrainingId) -> AppResult<Option<TrainingRecord>>;

    /// Lists every active training ordered by id.
    async fn list(&self) -> AppResult<Vec<TrainingRecord>>;

    /// Applies the provided fields and bumps the version. Returns the updated
    /// row, or `None` when no active training has that id.
    async fn update(
        &self,
        training_id: TrainingId,
        changes: TrainingChanges,
    ) -> AppResult<Option<TrainingRecord>>;

    /// Marks a training deleted. Returns `false` when no active training has
    /// that id.
    async fn soft_delete(&self, training_id: TrainingId) -> AppResult<bool>;
}

/// Unvalidated create payload.
#[derive(Debug, Clone)]
pub struct CreateTrainingInput {
    /// Program title.
    pub title: String,
    /// Difficulty tier.
    pub level: i32,
    /// Opaque serialized program payload.
    pub data: String,
}

/// Application service for the training catalog.
#[derive(Clone)]
pub struct TrainingService {
    training_repository: Arc<dyn TrainingRepository>,
}

impl TrainingService {
    /// Creates a new training service.
    #[must_use]
    pub fn new(training_repository: Arc<dyn TrainingRepository>) -> Self {
        Self {
            training_repository,
        }
    }

    /// Creates a training.
    pub async fn create(&self, input: CreateTrainingInput) -> AppResult<TrainingRecord> {
        let training = self
            .training_repository
            .create(NewTraining {
                title: NonEmptyString::for_field("title", input.title)?,
                level: input.level,
                data: NonEmptyString::for_field("data", input.data)?,
            })
            .await?;

        info!(training_id = %training.id, "training created");
        Ok(training)
    }

    /// Returns one training when `training_id` is given, otherwise all of them.
    pub async fn find(&self, training_id: Option<TrainingId>) -> AppResult<Found<TrainingRecord>> {
        match training_id {
            Some(training_id) => self.find_one(training_id).await.map(Found::One),
            None => self.training_repository.list().await.map(Found::Many),
        }
    }

    /// Returns a single active training.
    pub async fn find_one(&self, training_id: TrainingId) -> AppResult<TrainingRecord> {
        self.training_repository
            .find_by_id(training_id)
            .await?
            .ok_or_else(|| not_found(training_id))
    }

    /// Merges the provided fields into an existing training.
    pub async fn update(
        &self,
        training_id: TrainingId,
        title: Option<String>,
        level: Option<i32>,
        data: Option<String>,
    ) -> AppResult<TrainingRecord> {
        let changes = TrainingChanges {
            title: title
                .map(|value| NonEmptyString::for_field("title", value))
                .transpose()?,
            level,
            data: data
                .map(|value| NonEmptyString::for_field("data", value))
                .transpose()?,
        };

        let training = self
            .training_repository
            .update(training_id, changes)
            .await?
            .ok_or_else(|| not_found(training_id))?;

        info!(training_id = %training.id, version = training.version, "training updated");
        Ok(training)
    }

    /// Soft-deletes a training.
    pub async fn remove(&self, training_id: TrainingId) -> AppResult<()> {
        if !self.training_repository.soft_delete(training_id).await? {
            return Err(not_found(training_id));
        }

        info!(%training_id, "training removed");
        Ok(())
    }
}

fn not_found(training_id: TrainingId) -> AppError {
    AppError::NotFound(format!("training with id {training_id} not found"))
}

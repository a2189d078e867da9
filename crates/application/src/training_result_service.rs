//! Training result ledger ports and application service.
//!
//! Every result belongs to exactly one user. Single-record reads and all
//! mutations go through [`TrainingResultService::find_owned`], which yields
//! an [`OwnedTrainingResult`] handle only when the caller owns the row.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;
use vocal_coach_core::{AppError, AppResult, UserId, UserIdentity};
use vocal_coach_domain::{TrainingId, TrainingResultId};

use crate::{Found, TrainingRecord};

mod ownership;


pub use ownership::OwnedTrainingResult;

// ---------------------------------------------------------------------------
// Ports
// ---------------------------------------------------------------------------

/// Active training result, joined with its training when that still exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingResultRecord {
    /// Unique result identifier.
    pub id: TrainingResultId,
    /// Training the result was recorded for.
    pub training_id: TrainingId,
    /// Owning user.
    pub user_id: UserId,
    /// Recorded score, intended 0 to 100.
    pub score: i32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Optimistic concurrency counter.
    pub version: i32,
    /// Linked active training, if any.
    pub training: Option<TrainingRecord>,
}

/// Result fields ready to be persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewTrainingResult {
    /// Training the result was recorded for.
    pub training_id: TrainingId,
    /// Owning user.
    pub user_id: UserId,
    /// Recorded score.
    pub score: i32,
}

/// Partial update. The owner is never part of it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrainingResultChanges {
    /// New training reference, if provided.
    pub training_id: Option<TrainingId>,
    /// New score, if provided.
    pub score: Option<i32>,
}

/// Repository port for the training result ledger.
///
/// Every query is scoped by owner and skips soft-deleted rows.
#[async_trait::async_trait]
pub trait TrainingResultRepository: Send + Sync {
    /// Inserts a result and returns the stored row.
    async fn create(&self, result: NewTrainingResult) -> AppResult<TrainingResultRecord>;

    /// Finds a result by id, only if `owner` owns it.
    async fn find_for_owner(
        &self,
        result_id: TrainingResultId,
        owner: UserId,
    ) -> AppResult<Option<TrainingResultRecord>>;

    /// Lists the owner's results ordered by id.
    async fn list_for_owner(&self, owner: UserId) -> AppResult<Vec<TrainingResultRecord>>;

    /// Lists the owner's results for one training ordered by id.
    async fn list_for_owner_by_training(
        &self,
        owner: UserId,
        training_id: TrainingId,
    ) -> AppResult<Vec<TrainingResultRecord>>;

    /// Applies the provided fields to an owned result and bumps the version.
    /// Returns `None` when the row disappeared after the ownership check.
    async fn update_owned(
        &self,
        result: &OwnedTrainingResult,
        changes: TrainingResultChanges,
    ) -> AppResult<Option<TrainingResultRecord>>;

    /// Soft-deletes an owned result. Returns `false` when the row
    /// disappeared after the ownership check.
    async fn delete_owned(&self, result: OwnedTrainingResult) -> AppResult<bool>;
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Create payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateTrainingResultInput {
    /// Training the result is recorded for. Not checked for existence.
    pub training_id: TrainingId,
    /// Recorded score.
    pub score: i32,
}

/// Optional lookup filters. `id` takes precedence over `training_id`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrainingResultQuery {
    /// Single result to fetch.
    pub id: Option<TrainingResultId>,
    /// Training to list results for.
    pub training_id: Option<TrainingId>,
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

/// Application service for the training result ledger.
#[derive(Clone)]
pub struct TrainingResultService {
    training_result_repository: Arc<dyn TrainingResultRepository>,
}

impl TrainingResultService {
    /// Creates a new training result service.
    #[must_use]
    pub fn new(training_result_repository: Arc<dyn TrainingResultRepository>) -> Self {
        Self {
            training_result_repository,
        }
    }

    /// Records a result owned by the caller.
    pub async fn create(
        &self,
        actor: &UserIdentity,
        input: CreateTrainingResultInput,
    ) -> AppResult<TrainingResultRecord> {
        let result = self
            .training_result_repository
            .create(NewTrainingResult {
                training_id: input.training_id,
                user_id: actor.user_id(),
                score: input.score,
            })
            .await?;

        info!(
            result_id = %result.id,
            training_id = %result.training_id,
            user_id = %result.user_id,
            "training result recorded"
        );
        Ok(result)
    }

    /// Returns the caller's results filtered by `query`.
    pub async fn find(
        &self,
        actor: &UserIdentity,
        query: TrainingResultQuery,
    ) -> AppResult<Found<TrainingResultRecord>> {
        let owner = actor.user_id();

        if let Some(result_id) = query.id {
            return self
                .find_owned(actor, result_id)
                .await
                .map(|owned| Found::One(owned.into_record()));
        }

        let results = match query.training_id {
            Some(training_id) => {
                self.training_result_repository
                    .list_for_owner_by_training(owner, training_id)
                    .await?
            }
            None => self.training_result_repository.list_for_owner(owner).await?,
        };

        Ok(Found::Many(results))
    }

    /// Loads a result and proves the caller owns it.
    ///
    /// A result owned by someone else is reported exactly like a missing one.
    pub async fn find_owned(
        &self,
        actor: &UserIdentity,
        result_id: TrainingResultId,
    ) -> AppResult<OwnedTrainingResult> {
        self.training_result_repository
            .find_for_owner(result_id, actor.user_id())
            .await?
            .filter(|record| record.user_id == actor.user_id())
            .map(OwnedTrainingResult::new)
            .ok_or_else(|| not_found(result_id))
    }

    /// Changes the score or training reference of an owned result.
    pub async fn update(
        &self,
        actor: &UserIdentity,
        result_id: TrainingResultId,
        changes: TrainingResultChanges,
    ) -> AppResult<TrainingResultRecord> {
        let owned = self.find_owned(actor, result_id).await?;
        let result = self
            .training_result_repository
            .update_owned(&owned, changes)
            .await?
            .ok_or_else(|| not_found(result_id))?;

        info!(
            result_id = %result.id,
            user_id = %result.user_id,
            version = result.version,
            "training result updated"
        );
        Ok(result)
    }

    /// Soft-deletes an owned result.
    pub async fn remove(&self, actor: &UserIdentity, result_id: TrainingResultId) -> AppResult<()> {
        let owned = self.find_owned(actor, result_id).await?;
        let user_id = owned.user_id();

        if !self.training_result_repository.delete_owned(owned).await? {
            return Err(not_found(result_id));
        }

        info!(%result_id, %user_id, "training result removed");
        Ok(())
    }
}

fn not_found(result_id: TrainingResultId) -> AppError {
    AppError::NotFound(format!("training result with id {result_id} not found"))
}

use vocal_coach_core::UserId;
use vocal_coach_domain::TrainingResultId;

use super::TrainingResultRecord;

/// A training result whose ownership has been verified against the caller.
///
/// Only this crate can construct one, so repository mutations that take it
/// cannot be reached without an ownership-checked lookup first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedTrainingResult {
    record: TrainingResultRecord,
}

impl OwnedTrainingResult {
    pub(crate) fn new(record: TrainingResultRecord) -> Self {
        Self { record }
    }

    /// Result identifier.
    #[must_use]
    pub fn id(&self) -> TrainingResultId {
        self.record.id
    }

    /// Verified owner.
    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.record.user_id
    }

    /// Record as loaded during the ownership check.
    #[must_use]
    pub fn record(&self) -> &TrainingResultRecord {
        &self.record
    }

    /// Consumes the handle and returns the loaded record.
    #[must_use]
    pub fn into_record(self) -> TrainingResultRecord {
        self.record
    }
}

//! In-memory implementation of every repository port.
//!
//! Mirrors the Postgres adapters closely enough for API tests and local
//! runs without a database: ids are sequential, deletes are soft, and
//! uniqueness is enforced among active users only.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use vocal_coach_application::{TrainingRecord, TrainingResultRecord, UserRecord};

mod training_results;
mod trainings;
mod users;


/// A stored row with its soft-delete marker.
#[derive(Debug, Clone)]
struct Stored<T> {
    record: T,
    deleted_at: Option<DateTime<Utc>>,
}

impl<T> Stored<T> {
    fn active(record: T) -> Self {
        Self {
            record,
            deleted_at: None,
        }
    }

    fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }
}

/// In-memory users, trainings and training results.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    users: RwLock<BTreeMap<i64, Stored<UserRecord>>>,
    trainings: RwLock<BTreeMap<i64, Stored<TrainingRecord>>>,
    training_results: RwLock<BTreeMap<i64, Stored<TrainingResultRecord>>>,
}

impl InMemoryRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Next sequential key. Soft-deleted rows keep their keys, so ids are
/// never reused.
fn next_key<T>(rows: &BTreeMap<i64, T>) -> i64 {
    rows.keys().next_back().map_or(1, |last| last + 1)
}

//! In-process port fakes shared by the service tests.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use vocal_coach_core::{AppError, AppResult, UserId, UserIdentity};
use vocal_coach_domain::{Gender, TrainingId, TrainingResultId};

use crate::{
    AccessTokenClaims, NewTraining, NewTrainingResult, NewUser, OwnedTrainingResult,
    PasswordHasher, TokenCodec, TrainingChanges, TrainingRecord, TrainingRepository,
    TrainingResultChanges, TrainingResultRecord, TrainingResultRepository, UserRecord,
    UserRepository,
};

fn lock<T>(mutex: &Mutex<T>) -> AppResult<MutexGuard<'_, T>> {
    mutex
        .lock()
        .map_err(|error| AppError::Internal(format!("failed to lock fake state: {error}")))
}

pub(crate) fn identity(user_id: i64) -> UserIdentity {
    UserIdentity::new(UserId::new(user_id), format!("user{user_id}"))
}

pub(crate) fn user_record(user_id: i64, email: &str, display_name: &str) -> UserRecord {
    let now = Utc::now();
    UserRecord {
        id: UserId::new(user_id),
        email: email.to_owned(),
        display_name: display_name.to_owned(),
        password_hash: "hashed:secret1".to_owned(),
        gender: Gender::Female,
        created_at: now,
        updated_at: now,
        version: 1,
    }
}

#[derive(Default)]
pub(crate) struct FakeUserRepository {
    pub(crate) users: Mutex<Vec<UserRecord>>,
    pub(crate) fail_create_with_conflict: bool,
}

impl FakeUserRepository {
    pub(crate) fn with_users(users: Vec<UserRecord>) -> Self {
        Self {
            users: Mutex::new(users),
            fail_create_with_conflict: false,
        }
    }
}

#[async_trait]
impl UserRepository for FakeUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserRecord>> {
        Ok(lock(&self.users)?
            .iter()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn find_by_display_name(&self, display_name: &str) -> AppResult<Option<UserRecord>> {
        Ok(lock(&self.users)?
            .iter()
            .find(|user| user.display_name == display_name)
            .cloned())
    }

    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<UserRecord>> {
        Ok(lock(&self.users)?
            .iter()
            .find(|user| user.id == user_id)
            .cloned())
    }

    async fn create(&self, user: NewUser) -> AppResult<UserRecord> {
        if self.fail_create_with_conflict {
            return Err(AppError::Conflict(
                "an account with this email already exists".to_owned(),
            ));
        }

        let mut users = lock(&self.users)?;
        let now = Utc::now();
        let record = UserRecord {
            id: UserId::new(i64::try_from(users.len()).unwrap_or(i64::MAX) + 1),
            email: user.email.as_str().to_owned(),
            display_name: user.display_name.as_str().to_owned(),
            password_hash: user.password_hash,
            gender: user.gender,
            created_at: now,
            updated_at: now,
            version: 1,
        };
        users.push(record.clone());
        Ok(record)
    }
}

#[derive(Default)]
pub(crate) struct FakePasswordHasher {
    pub(crate) hash_calls: Mutex<usize>,
}

impl PasswordHasher for FakePasswordHasher {
    fn hash_password(&self, password: &str) -> AppResult<String> {
        *lock(&self.hash_calls)? += 1;
        Ok(format!("hashed:{password}"))
    }

    fn verify_password(&self, password: &str, hash: &str) -> AppResult<bool> {
        Ok(hash.strip_prefix("hashed:") == Some(password))
    }
}

/// Hands out opaque sequential tokens and remembers the claims behind them.
#[derive(Default)]
pub(crate) struct FakeTokenCodec {
    pub(crate) issued: Mutex<HashMap<String, AccessTokenClaims>>,
}

impl FakeTokenCodec {
    pub(crate) fn insert(&self, token: &str, claims: AccessTokenClaims) -> AppResult<()> {
        lock(&self.issued)?.insert(token.to_owned(), claims);
        Ok(())
    }
}

impl TokenCodec for FakeTokenCodec {
    fn encode(&self, claims: &AccessTokenClaims) -> AppResult<String> {
        let mut issued = lock(&self.issued)?;
        let token = format!("token-{}", issued.len() + 1);
        issued.insert(token.clone(), claims.clone());
        Ok(token)
    }

    fn decode(&self, token: &str) -> AppResult<AccessTokenClaims> {
        lock(&self.issued)?
            .get(token)
            .cloned()
            .ok_or_else(|| AppError::Unauthorized("invalid token".to_owned()))
    }
}

#[derive(Default)]
pub(crate) struct FakeTrainingRepository {
    pub(crate) trainings: Mutex<Vec<TrainingRecord>>,
}

#[async_trait]
impl TrainingRepository for FakeTrainingRepository {
    async fn create(&self, training: NewTraining) -> AppResult<TrainingRecord> {
        let mut trainings = lock(&self.trainings)?;
        let now = Utc::now();
        let record = TrainingRecord {
            id: TrainingId::new(i64::try_from(trainings.len()).unwrap_or(i64::MAX) + 1),
            title: training.title.into(),
            level: training.level,
            data: training.data.into(),
            created_at: now,
            updated_at: now,
            version: 1,
        };
        trainings.push(record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, training_id: TrainingId) -> AppResult<Option<TrainingRecord>> {
        Ok(lock(&self.trainings)?
            .iter()
            .find(|training| training.id == training_id)
            .cloned())
    }

    async fn list(&self) -> AppResult<Vec<TrainingRecord>> {
        Ok(lock(&self.trainings)?.clone())
    }

    async fn update(
        &self,
        training_id: TrainingId,
        changes: TrainingChanges,
    ) -> AppResult<Option<TrainingRecord>> {
        let mut trainings = lock(&self.trainings)?;
        let Some(training) = trainings
            .iter_mut()
            .find(|training| training.id == training_id)
        else {
            return Ok(None);
        };

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
        let mut trainings = lock(&self.trainings)?;
        let before = trainings.len();
        trainings.retain(|training| training.id != training_id);
        Ok(trainings.len() != before)
    }
}

/// Ledger fake. `find_for_owner` can be told to ignore the owner filter so
/// tests can prove the service re-checks ownership itself.
#[derive(Default)]
pub(crate) struct FakeTrainingResultRepository {
    pub(crate) results: Mutex<Vec<TrainingResultRecord>>,
    pub(crate) ignore_owner_filter: bool,
}

#[async_trait]
impl TrainingResultRepository for FakeTrainingResultRepository {
    async fn create(&self, result: NewTrainingResult) -> AppResult<TrainingResultRecord> {
        let mut results = lock(&self.results)?;
        let now = Utc::now();
        let record = TrainingResultRecord {
            id: TrainingResultId::new(i64::try_from(results.len()).unwrap_or(i64::MAX) + 1),
            training_id: result.training_id,
            user_id: result.user_id,
            score: result.score,
            created_at: now,
            updated_at: now,
            version: 1,
            training: None,
        };
        results.push(record.clone());
        Ok(record)
    }

    async fn find_for_owner(
        &self,
        result_id: TrainingResultId,
        owner: UserId,
    ) -> AppResult<Option<TrainingResultRecord>> {
        Ok(lock(&self.results)?
            .iter()
            .find(|result| {
                result.id == result_id && (self.ignore_owner_filter || result.user_id == owner)
            })
            .cloned())
    }

    async fn list_for_owner(&self, owner: UserId) -> AppResult<Vec<TrainingResultRecord>> {
        Ok(lock(&self.results)?
            .iter()
            .filter(|result| result.user_id == owner)
            .cloned()
            .collect())
    }

    async fn list_for_owner_by_training(
        &self,
        owner: UserId,
        training_id: TrainingId,
    ) -> AppResult<Vec<TrainingResultRecord>> {
        Ok(lock(&self.results)?
            .iter()
            .filter(|result| result.user_id == owner && result.training_id == training_id)
            .cloned()
            .collect())
    }

    async fn update_owned(
        &self,
        owned: &OwnedTrainingResult,
        changes: TrainingResultChanges,
    ) -> AppResult<Option<TrainingResultRecord>> {
        let mut results = lock(&self.results)?;
        let Some(result) = results
            .iter_mut()
            .find(|result| result.id == owned.id() && result.user_id == owned.user_id())
        else {
            return Ok(None);
        };

        if let Some(training_id) = changes.training_id {
            result.training_id = training_id;
        }
        if let Some(score) = changes.score {
            result.score = score;
        }
        result.version += 1;
        result.updated_at = Utc::now();

        Ok(Some(result.clone()))
    }

    async fn delete_owned(&self, owned: OwnedTrainingResult) -> AppResult<bool> {
        let mut results = lock(&self.results)?;
        let before = results.len();
        results.retain(|result| !(result.id == owned.id() && result.user_id == owned.user_id()));
        Ok(results.len() != before)
    }
}

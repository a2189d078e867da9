use async_trait::async_trait;
use chrono::Utc;
use vocal_coach_application::{NewUser, UserRecord, UserRepository};
use vocal_coach_core::{AppError, AppResult, UserId};

use super::{InMemoryRepository, Stored, next_key};

impl InMemoryRepository {
    async fn find_active_user(
        &self,
        predicate: impl Fn(&UserRecord) -> bool,
    ) -> Option<UserRecord> {
        self.users
            .read()
            .await
            .values()
            .find(|stored| stored.is_active() && predicate(&stored.record))
            .map(|stored| stored.record.clone())
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserRecord>> {
        let email = email.to_lowercase();
        Ok(self.find_active_user(|user| user.email == email).await)
    }

    async fn find_by_display_name(&self, display_name: &str) -> AppResult<Option<UserRecord>> {
        Ok(self
            .find_active_user(|user| user.display_name == display_name)
            .await)
    }

    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<UserRecord>> {
        Ok(self
            .users
            .read()
            .await
            .get(&user_id.as_i64())
            .filter(|stored| stored.is_active())
            .map(|stored| stored.record.clone()))
    }

    async fn create(&self, user: NewUser) -> AppResult<UserRecord> {
        let mut users = self.users.write().await;

        for stored in users.values().filter(|stored| stored.is_active()) {
            if stored.record.email == user.email.as_str() {
                return Err(AppError::Conflict(
                    "an account with this email already exists".to_owned(),
                ));
            }
            if stored.record.display_name == user.display_name.as_str() {
                return Err(AppError::Conflict(
                    "an account with this display name already exists".to_owned(),
                ));
            }
        }

        let id = next_key(&users);
        let now = Utc::now();
        let record = UserRecord {
            id: UserId::new(id),
            email: user.email.as_str().to_owned(),
            display_name: user.display_name.as_str().to_owned(),
            password_hash: user.password_hash,
            gender: user.gender,
            created_at: now,
            updated_at: now,
            version: 1,
        };
        users.insert(id, Stored::active(record.clone()));

        Ok(record)
    }
}

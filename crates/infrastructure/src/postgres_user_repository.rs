//! PostgreSQL-backed user repository.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use vocal_coach_application::{NewUser, UserRecord, UserRepository};
use vocal_coach_core::{AppError, AppResult, UserId};
use vocal_coach_domain::Gender;

mod account;
mod lookup;

#[cfg(test)]
mod tests;

const DISPLAY_NAME_INDEX: &str = "users_display_name_active_key";

/// PostgreSQL implementation of the user repository port.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    email: String,
    display_name: String,
    password_hash: String,
    gender: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    version: i32,
}

impl TryFrom<UserRow> for UserRecord {
    type Error = AppError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let gender = Gender::from_str(row.gender.as_str()).map_err(|_| {
            AppError::Internal(format!(
                "user {} has unknown stored gender '{}'",
                row.id, row.gender
            ))
        })?;

        Ok(Self {
            id: UserId::new(row.id),
            email: row.email,
            display_name: row.display_name,
            password_hash: row.password_hash,
            gender,
            created_at: row.created_at,
            updated_at: row.updated_at,
            version: row.version,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserRecord>> {
        self.find_by_email_impl(email).await
    }

    async fn find_by_display_name(&self, display_name: &str) -> AppResult<Option<UserRecord>> {
        self.find_by_display_name_impl(display_name).await
    }

    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<UserRecord>> {
        self.find_by_id_impl(user_id).await
    }

    async fn create(&self, user: NewUser) -> AppResult<UserRecord> {
        self.create_impl(user).await
    }
}

fn unique_conflict_or_internal(error: sqlx::Error, operation: &str) -> AppError {
    if let sqlx::Error::Database(ref database_error) = error
        && database_error.code().as_deref() == Some("23505")
    {
        let message = match database_error.constraint() {
            Some(DISPLAY_NAME_INDEX) => "an account with this display name already exists",
            _ => "an account with this email already exists",
        };
        return AppError::Conflict(message.to_owned());
    }

    AppError::Internal(format!("failed to {operation}: {error}"))
}

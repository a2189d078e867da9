//! Database fixtures for Postgres repository tests.
//!
//! Tests return early when `DATABASE_URL` is not set.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;
use vocal_coach_application::{NewUser, UserRecord, UserRepository};
use vocal_coach_core::AppResult;
use vocal_coach_domain::{DisplayName, EmailAddress, Gender};

use crate::PostgresUserRepository;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub(crate) async fn test_pool() -> Option<PgPool> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        return None;
    };

    let pool = match PgPoolOptions::new()
        .max_connections(2)
        .connect(database_url.as_str())
        .await
    {
        Ok(pool) => pool,
        Err(error) => panic!("failed to connect to DATABASE_URL in test: {error}"),
    };

    if let Err(error) = MIGRATOR.run(&pool).await {
        panic!("failed to run migrations for postgres repository tests: {error}");
    }

    Some(pool)
}

/// Inserts a user with a unique email and display name.
pub(crate) async fn insert_user(pool: &PgPool) -> AppResult<UserRecord> {
    let suffix = Uuid::new_v4().simple().to_string();
    PostgresUserRepository::new(pool.clone())
        .create(NewUser {
            email: EmailAddress::new(format!("user-{suffix}@example.com"))?,
            display_name: DisplayName::new(format!("user-{}", &suffix[..12]))?,
            password_hash: "$argon2id$placeholder".to_owned(),
            gender: Gender::Male,
        })
        .await
}

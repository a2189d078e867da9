use uuid::Uuid;
use vocal_coach_application::{NewUser, UserRepository};
use vocal_coach_core::{AppError, AppResult, UserId};
use vocal_coach_domain::{DisplayName, EmailAddress, Gender};

use super::PostgresUserRepository;
use crate::test_support::test_pool;

fn new_user(email: &str, display_name: &str) -> AppResult<NewUser> {
    Ok(NewUser {
        email: EmailAddress::new(email)?,
        display_name: DisplayName::new(display_name)?,
        password_hash: "$argon2id$placeholder".to_owned(),
        gender: Gender::Female,
    })
}

fn unique_suffix() -> String {
    Uuid::new_v4().simple().to_string()[..12].to_owned()
}

#[tokio::test]
async fn created_user_is_found_by_email_display_name_and_id() -> AppResult<()> {
    let Some(pool) = test_pool().await else {
        return Ok(());
    };
    let repository = PostgresUserRepository::new(pool);
    let suffix = unique_suffix();
    let email = format!("ann-{suffix}@example.com");
    let display_name = format!("Ann {suffix}");

    let created = repository.create(new_user(&email, &display_name)?).await?;

    assert_eq!(created.version, 1);
    assert_eq!(created.gender, Gender::Female);

    let by_email = repository.find_by_email(&email.to_uppercase()).await?;
    let by_name = repository.find_by_display_name(&display_name).await?;
    let by_id = repository.find_by_id(created.id).await?;

    assert_eq!(by_email.map(|user| user.id), Some(created.id));
    assert_eq!(by_name.map(|user| user.id), Some(created.id));
    assert_eq!(by_id.map(|user| user.email), Some(email));
    Ok(())
}

#[tokio::test]
async fn duplicate_email_and_display_name_map_to_conflict() -> AppResult<()> {
    let Some(pool) = test_pool().await else {
        return Ok(());
    };
    let repository = PostgresUserRepository::new(pool);
    let suffix = unique_suffix();
    let email = format!("dup-{suffix}@example.com");
    let display_name = format!("Dup {suffix}");
    repository.create(new_user(&email, &display_name)?).await?;

    let same_email = repository
        .create(new_user(&email, &format!("Other {suffix}"))?)
        .await;
    let same_name = repository
        .create(new_user(&format!("other-{suffix}@example.com"), &display_name)?)
        .await;

    assert!(matches!(
        same_email,
        Err(AppError::Conflict(message)) if message.contains("email")
    ));
    assert!(matches!(
        same_name,
        Err(AppError::Conflict(message)) if message.contains("display name")
    ));
    Ok(())
}

#[tokio::test]
async fn soft_deleted_user_is_invisible() -> AppResult<()> {
    let Some(pool) = test_pool().await else {
        return Ok(());
    };
    let repository = PostgresUserRepository::new(pool.clone());
    let suffix = unique_suffix();
    let created = repository
        .create(new_user(
            &format!("gone-{suffix}@example.com"),
            &format!("Gone {suffix}"),
        )?)
        .await?;

    let deleted = sqlx::query("UPDATE users SET deleted_at = now() WHERE id = $1")
        .bind(created.id.as_i64())
        .execute(&pool)
        .await;
    assert!(deleted.is_ok());

    assert!(repository.find_by_id(created.id).await?.is_none());
    assert!(repository.find_by_email(&created.email).await?.is_none());
    assert!(repository.find_by_id(UserId::new(-1)).await?.is_none());
    Ok(())
}

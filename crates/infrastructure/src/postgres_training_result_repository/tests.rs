use std::sync::Arc;

use vocal_coach_application::{
    CreateTrainingResultInput, Found, NewTraining, TrainingRepository, TrainingResultChanges,
    TrainingResultQuery, TrainingResultRepository, TrainingResultService,
};
use vocal_coach_core::{AppError, AppResult, NonEmptyString, UserIdentity};
use vocal_coach_domain::TrainingId;

use super::PostgresTrainingResultRepository;
use crate::PostgresTrainingRepository;
use crate::test_support::{insert_user, test_pool};

async fn identity(pool: &sqlx::PgPool) -> AppResult<UserIdentity> {
    let user = insert_user(pool).await?;
    Ok(UserIdentity::new(user.id, user.display_name))
}

#[tokio::test]
async fn reads_embed_active_training_only() -> AppResult<()> {
    let Some(pool) = test_pool().await else {
        return Ok(());
    };
    let trainings = PostgresTrainingRepository::new(pool.clone());
    let repository = PostgresTrainingResultRepository::new(pool.clone());
    let owner = identity(&pool).await?;
    let training = trainings
        .create(NewTraining {
            title: NonEmptyString::new("Breathing")?,
            level: 1,
            data: NonEmptyString::new("[]")?,
        })
        .await?;

    let service = TrainingResultService::new(Arc::new(repository.clone()));
    let created = service
        .create(
            &owner,
            CreateTrainingResultInput {
                training_id: training.id,
                score: 88,
            },
        )
        .await?;
    assert_eq!(
        created.training.as_ref().map(|training| training.title.as_str()),
        Some("Breathing")
    );

    trainings.soft_delete(training.id).await?;
    let reloaded = repository.find_for_owner(created.id, owner.user_id()).await?;

    assert!(matches!(reloaded, Some(result) if result.training.is_none()));
    Ok(())
}

#[tokio::test]
async fn ledger_queries_are_scoped_by_owner() -> AppResult<()> {
    let Some(pool) = test_pool().await else {
        return Ok(());
    };
    let repository = Arc::new(PostgresTrainingResultRepository::new(pool.clone()));
    let service = TrainingResultService::new(repository.clone());
    let ann = identity(&pool).await?;
    let bob = identity(&pool).await?;
    let orphan_training = TrainingId::new(i64::MAX);

    let anns = service
        .create(
            &ann,
            CreateTrainingResultInput {
                training_id: orphan_training,
                score: 40,
            },
        )
        .await?;
    service
        .create(
            &bob,
            CreateTrainingResultInput {
                training_id: orphan_training,
                score: 90,
            },
        )
        .await?;

    let listed = service.find(&ann, TrainingResultQuery::default()).await?;
    assert!(matches!(
        listed,
        Found::Many(results) if results.len() == 1 && results[0].id == anns.id
    ));

    let by_training = repository
        .list_for_owner_by_training(bob.user_id(), orphan_training)
        .await?;
    assert_eq!(by_training.len(), 1);
    assert_eq!(by_training[0].score, 90);

    assert!(matches!(
        service.find_owned(&bob, anns.id).await,
        Err(AppError::NotFound(_))
    ));
    Ok(())
}

#[tokio::test]
async fn owned_update_and_delete_follow_the_handle() -> AppResult<()> {
    let Some(pool) = test_pool().await else {
        return Ok(());
    };
    let service = TrainingResultService::new(Arc::new(PostgresTrainingResultRepository::new(
        pool.clone(),
    )));
    let owner = identity(&pool).await?;
    let created = service
        .create(
            &owner,
            CreateTrainingResultInput {
                training_id: TrainingId::new(1),
                score: 10,
            },
        )
        .await?;

    let updated = service
        .update(
            &owner,
            created.id,
            TrainingResultChanges {
                training_id: None,
                score: Some(75),
            },
        )
        .await?;
    assert_eq!(updated.score, 75);
    assert_eq!(updated.user_id, owner.user_id());
    assert_eq!(updated.version, created.version + 1);

    service.remove(&owner, created.id).await?;
    assert!(matches!(
        service.remove(&owner, created.id).await,
        Err(AppError::NotFound(_))
    ));
    Ok(())
}

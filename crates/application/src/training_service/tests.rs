use std::sync::Arc;

use vocal_coach_core::{AppError, AppResult};
use vocal_coach_domain::TrainingId;

use super::{CreateTrainingInput, TrainingService};
use crate::Found;
use crate::test_fakes::FakeTrainingRepository;

fn service() -> TrainingService {
    TrainingService::new(Arc::new(FakeTrainingRepository::default()))
}

fn scales() -> CreateTrainingInput {
    CreateTrainingInput {
        title: "Scales".to_owned(),
        level: 1,
        data: "{}".to_owned(),
    }
}

#[tokio::test]
async fn created_training_is_found_with_identical_fields() -> AppResult<()> {
    let service = service();

    let created = service.create(scales()).await?;
    let found = service.find(Some(created.id)).await?;

    let Found::One(found) = found else {
        return Err(AppError::Internal("expected a single training".to_owned()));
    };
    assert_eq!(found.title, "Scales");
    assert_eq!(found.level, 1);
    assert_eq!(found.data, "{}");
    assert_eq!(found, created);
    Ok(())
}

#[tokio::test]
async fn find_without_id_lists_every_training() -> AppResult<()> {
    let service = service();
    service.create(scales()).await?;
    service
        .create(CreateTrainingInput {
            title: "Breathing".to_owned(),
            ..scales()
        })
        .await?;

    let found = service.find(None).await?;

    assert!(matches!(found, Found::Many(trainings) if trainings.len() == 2));
    Ok(())
}

#[tokio::test]
async fn create_rejects_blank_title_and_data() {
    let service = service();

    let blank_title = service
        .create(CreateTrainingInput {
            title: " ".to_owned(),
            ..scales()
        })
        .await;
    let blank_data = service
        .create(CreateTrainingInput {
            data: String::new(),
            ..scales()
        })
        .await;

    assert!(matches!(
        blank_title,
        Err(AppError::Validation(message)) if message.starts_with("title")
    ));
    assert!(matches!(
        blank_data,
        Err(AppError::Validation(message)) if message.starts_with("data")
    ));
}

#[tokio::test]
async fn update_merges_only_provided_fields() -> AppResult<()> {
    let service = service();
    let created = service.create(scales()).await?;

    let updated = service.update(created.id, None, Some(3), None).await?;

    assert_eq!(updated.title, "Scales");
    assert_eq!(updated.level, 3);
    assert_eq!(updated.data, "{}");
    assert_eq!(updated.version, created.version + 1);
    Ok(())
}

#[tokio::test]
async fn update_of_missing_training_is_not_found() {
    let result = service()
        .update(TrainingId::new(42), Some("New".to_owned()), None, None)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn removed_training_is_no_longer_found() -> AppResult<()> {
    let service = service();
    let created = service.create(scales()).await?;

    service.remove(created.id).await?;

    assert!(matches!(
        service.find(Some(created.id)).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.remove(created.id).await,
        Err(AppError::NotFound(_))
    ));
    Ok(())
}

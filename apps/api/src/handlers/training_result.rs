use axum::Json;
use axum::extract::{Extension, State};
use axum::http::StatusCode;
use vocal_coach_application::{
    CreateTrainingResultInput, TrainingResultChanges, TrainingResultQuery as LedgerQuery,
};
use vocal_coach_core::{AppError, UserIdentity};
use vocal_coach_domain::{TrainingId, TrainingResultId};

use crate::dto::{
    CreateTrainingResultRequest, IdQuery, MessageResponse, OneOrMany, TrainingResultQuery,
    TrainingResultResponse, UpdateTrainingResultRequest,
};
use crate::error::ApiResult;
use crate::extract::{ApiJson, ApiQuery};
use crate::state::AppState;

pub async fn create_training_result_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    ApiJson(payload): ApiJson<CreateTrainingResultRequest>,
) -> ApiResult<(StatusCode, Json<TrainingResultResponse>)> {
    let result = state
        .training_result_service
        .create(
            &user,
            CreateTrainingResultInput {
                training_id: TrainingId::new(payload.training_id),
                score: payload.score,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(TrainingResultResponse::from(result))))
}

pub async fn find_training_result_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    ApiQuery(query): ApiQuery<TrainingResultQuery>,
) -> ApiResult<Json<OneOrMany<TrainingResultResponse>>> {
    let found = state
        .training_result_service
        .find(
            &user,
            LedgerQuery {
                id: query.id.map(TrainingResultId::new),
                training_id: query.training_id.map(TrainingId::new),
            },
        )
        .await?;

    Ok(Json(found.map(TrainingResultResponse::from).into()))
}

pub async fn update_training_result_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    ApiQuery(query): ApiQuery<IdQuery>,
    ApiJson(payload): ApiJson<UpdateTrainingResultRequest>,
) -> ApiResult<Json<TrainingResultResponse>> {
    let result = state
        .training_result_service
        .update(
            &user,
            required_id(&query)?,
            TrainingResultChanges {
                training_id: payload.training_id.map(TrainingId::new),
                score: payload.score,
            },
        )
        .await?;

    Ok(Json(TrainingResultResponse::from(result)))
}

pub async fn delete_training_result_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    ApiQuery(query): ApiQuery<IdQuery>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .training_result_service
        .remove(&user, required_id(&query)?)
        .await?;

    Ok(Json(MessageResponse {
        message: "training result deleted successfully".to_owned(),
    }))
}

fn required_id(query: &IdQuery) -> Result<TrainingResultId, AppError> {
    query
        .id
        .map(TrainingResultId::new)
        .ok_or_else(|| AppError::Validation("id query parameter is required".to_owned()))
}

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use vocal_coach_application::CreateTrainingInput;
use vocal_coach_core::AppError;
use vocal_coach_domain::TrainingId;

use crate::dto::{
    CreateTrainingRequest, IdQuery, MessageResponse, OneOrMany, TrainingResponse,
    UpdateTrainingRequest,
};
use crate::error::ApiResult;
use crate::extract::{ApiJson, ApiQuery};
use crate::state::AppState;

pub async fn create_training_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateTrainingRequest>,
) -> ApiResult<(StatusCode, Json<TrainingResponse>)> {
    let training = state
        .training_service
        .create(CreateTrainingInput {
            title: payload.title,
            level: payload.level,
            data: payload.data,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(TrainingResponse::from(training))))
}

pub async fn find_training_handler(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<IdQuery>,
) -> ApiResult<Json<OneOrMany<TrainingResponse>>> {
    let found = state
        .training_service
        .find(query.id.map(TrainingId::new))
        .await?;

    Ok(Json(found.map(TrainingResponse::from).into()))
}

pub async fn update_training_handler(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<IdQuery>,
    ApiJson(payload): ApiJson<UpdateTrainingRequest>,
) -> ApiResult<Json<TrainingResponse>> {
    let training = state
        .training_service
        .update(
            required_id(&query)?,
            payload.title,
            payload.level,
            payload.data,
        )
        .await?;

    Ok(Json(TrainingResponse::from(training)))
}

pub async fn delete_training_handler(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<IdQuery>,
) -> ApiResult<Json<MessageResponse>> {
    state.training_service.remove(required_id(&query)?).await?;

    Ok(Json(MessageResponse {
        message: "training deleted successfully".to_owned(),
    }))
}

fn required_id(query: &IdQuery) -> Result<TrainingId, AppError> {
    query
        .id
        .map(TrainingId::new)
        .ok_or_else(|| AppError::Validation("id query parameter is required".to_owned()))
}

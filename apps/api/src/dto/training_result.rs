use serde::{Deserialize, Serialize};
use ts_rs::TS;
use vocal_coach_application::TrainingResultRecord;

use super::TrainingResponse;
use super::common::{empty_as_none, timestamp};

/// `?id=&trainingId=` query for ledger reads.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingResultQuery {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub training_id: Option<i64>,
}

/// Incoming payload for recording a result.
#[derive(Debug, Deserialize, TS)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/create-training-result-request.ts"
)]
pub struct CreateTrainingResultRequest {
    pub training_id: i64,
    pub score: i32,
}

/// Partial result update. The owner cannot be changed.
#[derive(Debug, Deserialize, TS)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/update-training-result-request.ts"
)]
pub struct UpdateTrainingResultRequest {
    #[serde(default)]
    pub training_id: Option<i64>,
    #[serde(default)]
    pub score: Option<i32>,
}

/// API representation of a training result.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/training-result-response.ts"
)]
pub struct TrainingResultResponse {
    pub id: i64,
    pub training_id: i64,
    pub user_id: i64,
    pub score: i32,
    pub created_at: String,
    pub updated_at: String,
    pub training: Option<TrainingResponse>,
}

impl From<TrainingResultRecord> for TrainingResultResponse {
    fn from(result: TrainingResultRecord) -> Self {
        Self {
            id: result.id.as_i64(),
            training_id: result.training_id.as_i64(),
            user_id: result.user_id.as_i64(),
            score: result.score,
            created_at: timestamp(result.created_at),
            updated_at: timestamp(result.updated_at),
            training: result.training.map(TrainingResponse::from),
        }
    }
}

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use vocal_coach_application::TrainingRecord;

use super::common::timestamp;

/// Incoming payload for training creation.
#[derive(Debug, Deserialize, TS)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/create-training-request.ts"
)]
pub struct CreateTrainingRequest {
    pub title: String,
    pub level: i32,
    /// Opaque serialized program, stored verbatim.
    pub data: String,
}

/// Partial training update.
#[derive(Debug, Deserialize, TS)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/update-training-request.ts"
)]
pub struct UpdateTrainingRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub level: Option<i32>,
    #[serde(default)]
    pub data: Option<String>,
}

/// API representation of a training.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/training-response.ts"
)]
pub struct TrainingResponse {
    pub id: i64,
    pub title: String,
    pub level: i32,
    pub data: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<TrainingRecord> for TrainingResponse {
    fn from(training: TrainingRecord) -> Self {
        Self {
            id: training.id.as_i64(),
            title: training.title,
            level: training.level,
            data: training.data,
            created_at: timestamp(training.created_at),
            updated_at: timestamp(training.updated_at),
        }
    }
}

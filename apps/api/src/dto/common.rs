use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;
use vocal_coach_application::Found;

/// Health response payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/health-response.ts"
)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Confirmation body for deletes.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/message-response.ts"
)]
pub struct MessageResponse {
    pub message: String,
}

/// `?id=` query. An empty value counts as absent.
#[derive(Debug, Default, Deserialize)]
pub struct IdQuery {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub id: Option<i64>,
}

/// Single record when an id was given, otherwise a list.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> From<Found<T>> for OneOrMany<T> {
    fn from(value: Found<T>) -> Self {
        match value {
            Found::One(item) => Self::One(item),
            Found::Many(items) => Self::Many(items),
        }
    }
}

/// Deserializes an optional integer query value, treating `""` as `None`.
pub(super) fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .parse::<i64>()
        .map(Some)
        .map_err(|_| serde::de::Error::custom(format!("'{trimmed}' is not a valid integer id")))
}

pub(super) fn timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

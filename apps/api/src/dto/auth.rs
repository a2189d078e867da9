use serde::{Deserialize, Serialize};
use ts_rs::TS;
use vocal_coach_application::UserRecord;

use super::common::timestamp;

/// Incoming payload for registration.
#[derive(Debug, Deserialize, TS)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/register-request.ts"
)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub display_name: String,
    /// `MALE` or `FEMALE`.
    pub gender: String,
}

/// Newly registered user. Never carries the password hash.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/registered-user-response.ts"
)]
pub struct RegisteredUserResponse {
    pub id: i64,
    pub email: String,
    pub display_name: String,
    pub gender: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<UserRecord> for RegisteredUserResponse {
    fn from(user: UserRecord) -> Self {
        Self {
            id: user.id.as_i64(),
            email: user.email,
            display_name: user.display_name,
            gender: user.gender.as_str().to_owned(),
            created_at: timestamp(user.created_at),
            updated_at: timestamp(user.updated_at),
        }
    }
}

/// Incoming payload for login.
#[derive(Debug, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/login-request.ts"
)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Signed bearer token.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/login-response.ts"
)]
pub struct LoginResponse {
    pub access_token: String,
}

use serde::Serialize;
use ts_rs::TS;
use vocal_coach_application::UserProfile;

/// Public profile of a user.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/profile-response.ts"
)]
pub struct ProfileResponse {
    pub id: i64,
    pub email: String,
    pub display_name: String,
}

impl From<UserProfile> for ProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id.as_i64(),
            email: profile.email,
            display_name: profile.display_name,
        }
    }
}

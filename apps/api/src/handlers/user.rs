use axum::Json;
use axum::extract::{Extension, State};
use vocal_coach_core::{UserId, UserIdentity};

use crate::dto::{IdQuery, ProfileResponse};
use crate::error::ApiResult;
use crate::extract::ApiQuery;
use crate::state::AppState;

/// GET /user - Profile of `?id=` or, without it, of the caller.
pub async fn profile_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    ApiQuery(query): ApiQuery<IdQuery>,
) -> ApiResult<Json<ProfileResponse>> {
    let user_id = query.id.map_or_else(|| user.user_id(), UserId::new);
    let profile = state.user_service.get_profile(user_id).await?;

    Ok(Json(ProfileResponse::from(profile)))
}

use vocal_coach_core::AppError;

use super::*;

impl UserService {
    /// Returns the public profile of an active user.
    pub async fn get_profile(&self, user_id: UserId) -> AppResult<UserProfile> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .map(UserProfile::from)
            .ok_or_else(|| AppError::NotFound("user not found".to_owned()))
    }
}

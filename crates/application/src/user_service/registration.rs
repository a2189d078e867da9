use tracing::info;
use vocal_coach_core::AppError;
use vocal_coach_domain::{DisplayName, EmailAddress, validate_password};

use super::*;

impl UserService {
    /// Registers a new user with email, password, display name and gender.
    ///
    /// The email and display name pre-checks only produce a friendlier
    /// error early; the repository's uniqueness constraint decides races.
    pub async fn register(&self, params: RegisterParams) -> AppResult<UserRecord> {
        let email = EmailAddress::new(&params.email)?;
        let display_name = DisplayName::new(&params.display_name)?;
        validate_password(&params.password)?;

        if self
            .user_repository
            .find_by_email(email.as_str())
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "an account with this email already exists".to_owned(),
            ));
        }

        if self
            .user_repository
            .find_by_display_name(display_name.as_str())
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "an account with this display name already exists".to_owned(),
            ));
        }

        let password_hash = self.password_hasher.hash_password(&params.password)?;
        let user = self
            .user_repository
            .create(NewUser {
                email,
                display_name,
                password_hash,
                gender: params.gender,
            })
            .await?;

        info!(user_id = %user.id, "user registered");

        Ok(user)
    }
}

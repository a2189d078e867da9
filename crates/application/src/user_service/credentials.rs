use super::*;

impl UserService {
    /// Checks an email and password pair against the stored credentials.
    ///
    /// Returns `CredentialCheck::NoMatch` for an unknown email and for a
    /// wrong password alike. An unknown email still pays for one hash so
    /// both paths cost roughly the same.
    pub async fn validate_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> AppResult<CredentialCheck> {
        let canonical_email = email.trim().to_lowercase();
        let user = self
            .user_repository
            .find_by_email(canonical_email.as_str())
            .await?;

        let Some(user) = user else {
            let _ = self.password_hasher.hash_password(password);
            return Ok(CredentialCheck::NoMatch);
        };

        let password_valid = self
            .password_hasher
            .verify_password(password, &user.password_hash)?;

        if !password_valid {
            return Ok(CredentialCheck::NoMatch);
        }

        Ok(CredentialCheck::Matched(user))
    }
}

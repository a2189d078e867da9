//! User domain types and validation rules.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use vocal_coach_core::{AppError, AppResult, NonEmptyString};

/// Validated email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// Performs basic structural validation: non-empty, contains exactly one `@`,
    /// local part and domain are non-empty, domain contains at least one `.`.
    /// The stored form is trimmed and lower-cased.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        let trimmed = value.trim().to_lowercase();

        if trimmed.is_empty() {
            return Err(AppError::Validation("email must not be empty".to_owned()));
        }

        let Some((local, domain)) = trimmed.split_once('@') else {
            return Err(AppError::Validation(
                "email must contain exactly one '@'".to_owned(),
            ));
        };

        if domain.contains('@') {
            return Err(AppError::Validation(
                "email must contain exactly one '@'".to_owned(),
            ));
        }

        if local.is_empty() {
            return Err(AppError::Validation(
                "email local part must not be empty".to_owned(),
            ));
        }

        if domain.is_empty() || !domain.contains('.') {
            return Err(AppError::Validation(
                "email domain must contain at least one '.'".to_owned(),
            ));
        }

        if trimmed.len() > 254 {
            return Err(AppError::Validation(
                "email must not exceed 254 characters".to_owned(),
            ));
        }

        Ok(Self(trimmed))
    }

    /// Returns the validated email string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

/// Maximum display name length in characters.
pub const DISPLAY_NAME_MAX_LENGTH: usize = 64;

/// Validated public display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplayName(NonEmptyString);

impl DisplayName {
    /// Creates a validated display name. Surrounding whitespace is removed.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        let trimmed = value.trim();

        if trimmed.chars().count() > DISPLAY_NAME_MAX_LENGTH {
            return Err(AppError::Validation(format!(
                "displayName must not exceed {DISPLAY_NAME_MAX_LENGTH} characters"
            )));
        }

        NonEmptyString::for_field("displayName", trimmed).map(Self)
    }

    /// Returns the validated display name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<DisplayName> for String {
    fn from(value: DisplayName) -> Self {
        value.0.into()
    }
}

/// Minimum password length.
pub const PASSWORD_MIN_LENGTH: usize = 6;

/// Maximum password length (bounds the cost of hashing attacker input).
pub const PASSWORD_MAX_LENGTH: usize = 128;

/// Validates a plaintext password length.
pub fn validate_password(password: &str) -> AppResult<()> {
    let char_count = password.chars().count();

    if char_count < PASSWORD_MIN_LENGTH {
        return Err(AppError::Validation(format!(
            "password must be at least {PASSWORD_MIN_LENGTH} characters"
        )));
    }

    if char_count > PASSWORD_MAX_LENGTH {
        return Err(AppError::Validation(format!(
            "password must not exceed {PASSWORD_MAX_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Gender recorded at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
}

impl Gender {
    /// Returns the storage string for this gender.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "MALE",
            Self::Female => "FEMALE",
        }
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "MALE" => Ok(Self::Male),
            "FEMALE" => Ok(Self::Female),
            _ => Err(AppError::Validation(format!(
                "gender must be one of MALE, FEMALE; got '{value}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn valid_email_is_accepted() {
        let email = EmailAddress::new("  USER@Example.COM ");
        assert!(matches!(email, Ok(ref value) if value.as_str() == "user@example.com"));
    }

    #[test]
    fn email_without_at_is_rejected() {
        assert!(EmailAddress::new("noatsign").is_err());
    }

    #[test]
    fn email_with_two_ats_is_rejected() {
        assert!(EmailAddress::new("a@b@example.com").is_err());
    }

    #[test]
    fn email_without_domain_dot_is_rejected() {
        assert!(EmailAddress::new("user@nodot").is_err());
    }

    #[test]
    fn empty_email_is_rejected() {
        assert!(EmailAddress::new("").is_err());
    }

    #[test]
    fn display_name_is_trimmed() {
        let name = DisplayName::new("  Ann ");
        assert!(matches!(name, Ok(ref value) if value.as_str() == "Ann"));
    }

    #[test]
    fn blank_display_name_is_rejected() {
        assert!(DisplayName::new("   ").is_err());
    }

    #[test]
    fn overlong_display_name_is_rejected() {
        let long = "n".repeat(DISPLAY_NAME_MAX_LENGTH + 1);
        assert!(DisplayName::new(long).is_err());
    }

    #[test]
    fn short_password_is_rejected() {
        assert!(validate_password("abc").is_err());
    }

    #[test]
    fn minimum_length_password_is_accepted() {
        assert!(validate_password("secret").is_ok());
    }

    #[test]
    fn very_long_password_is_rejected() {
        let long = "a".repeat(PASSWORD_MAX_LENGTH + 1);
        assert!(validate_password(&long).is_err());
    }

    #[test]
    fn gender_round_trips_through_storage_string() {
        for gender in [Gender::Male, Gender::Female] {
            assert!(matches!(gender.as_str().parse::<Gender>(), Ok(parsed) if parsed == gender));
        }
        assert!("female".parse::<Gender>().is_err());
    }

    proptest! {
        /// Any accepted email is stored lower-cased with a single '@'.
        #[test]
        fn accepted_emails_are_canonical(
            local in "[A-Za-z0-9._]{1,20}",
            domain in "[A-Za-z0-9]{1,20}\\.[A-Za-z]{2,6}",
        ) {
            let email = EmailAddress::new(format!("{local}@{domain}"));
            prop_assert!(email.is_ok());
            if let Ok(email) = email {
                prop_assert_eq!(email.as_str(), email.as_str().to_lowercase());
                prop_assert_eq!(email.as_str().matches('@').count(), 1);
            }
        }

        /// Password validation depends only on character count.
        #[test]
        fn password_length_bounds_hold(password in "\\PC{0,140}") {
            let count = password.chars().count();
            let expected = (PASSWORD_MIN_LENGTH..=PASSWORD_MAX_LENGTH).contains(&count);
            prop_assert_eq!(validate_password(&password).is_ok(), expected);
        }
    }
}

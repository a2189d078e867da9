use crate::UserId;

/// Authenticated caller resolved from a bearer token.
///
/// Always built from the stored user record, never from token claims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    user_id: UserId,
    display_name: String,
}

impl UserIdentity {
    /// Creates a user identity from the current stored user fields.
    #[must_use]
    pub fn new(user_id: UserId, display_name: impl Into<String>) -> Self {
        Self {
            user_id,
            display_name: display_name.into(),
        }
    }

    /// Returns the stable user identifier.
    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the display name for the current user.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display_name.as_str()
    }
}

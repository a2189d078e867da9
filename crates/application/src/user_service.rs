//! User credential ports and application service.
//!
//! Owns registration, credential validation and profile projection.
//! Failure responses for login never reveal whether the email exists.

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use vocal_coach_core::{AppResult, UserId};
use vocal_coach_domain::{DisplayName, EmailAddress, Gender};

mod credentials;
mod profile;
mod registration;


// ---------------------------------------------------------------------------
// Ports
// ---------------------------------------------------------------------------

/// Active user record returned by repository queries.
#[derive(Clone)]
pub struct UserRecord {
    /// Unique user identifier.
    pub id: UserId,
    /// Canonical lower-cased email address.
    pub email: String,
    /// Public display name.
    pub display_name: String,
    /// Argon2id password hash. Never leaves the application layer.
    pub password_hash: String,
    /// Gender recorded at registration.
    pub gender: Gender,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Optimistic concurrency counter.
    pub version: i32,
}

impl Debug for UserRecord {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("UserRecord")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("display_name", &self.display_name)
            .field("password_hash", &"<redacted>")
            .field("gender", &self.gender)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .field("version", &self.version)
            .finish()
    }
}

/// Validated user fields ready to be persisted.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Canonical email address.
    pub email: EmailAddress,
    /// Validated display name.
    pub display_name: DisplayName,
    /// Already-hashed password.
    pub password_hash: String,
    /// Gender recorded at registration.
    pub gender: Gender,
}

/// Repository port for user persistence.
///
/// Every lookup only considers users that have not been soft-deleted.
#[async_trait::async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds an active user by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserRecord>>;

    /// Finds an active user by display name.
    async fn find_by_display_name(&self, display_name: &str) -> AppResult<Option<UserRecord>>;

    /// Finds an active user by their unique identifier.
    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<UserRecord>>;

    /// Creates a new user record.
    ///
    /// Must fail with `AppError::Conflict` when the storage uniqueness
    /// constraint on email or display name is violated.
    async fn create(&self, user: NewUser) -> AppResult<UserRecord>;
}

/// Port for password hashing operations. Keeps domain/application free of
/// direct cryptographic library coupling.
pub trait PasswordHasher: Send + Sync {
    /// Hashes a plaintext password with a per-password salt.
    fn hash_password(&self, password: &str) -> AppResult<String>;

    /// Verifies a plaintext password against a stored hash.
    fn verify_password(&self, password: &str, hash: &str) -> AppResult<bool>;
}

// ---------------------------------------------------------------------------
// Outcomes and request types
// ---------------------------------------------------------------------------

/// Result of a credential check.
#[derive(Debug)]
pub enum CredentialCheck {
    /// Email and password matched an active user.
    Matched(UserRecord),
    /// No active user with that email, or the password did not match.
    NoMatch,
}

/// Parameters for user registration.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    /// Email address for the new account.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Public display name.
    pub display_name: String,
    /// Gender recorded at registration.
    pub gender: Gender,
}

/// Public-safe projection of a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    /// Unique user identifier.
    pub id: UserId,
    /// Canonical email address.
    pub email: String,
    /// Public display name.
    pub display_name: String,
}

impl From<UserRecord> for UserProfile {
    fn from(user: UserRecord) -> Self {
        Self {
            id: user.id,
            email: user.email,
            display_name: user.display_name,
        }
    }
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

/// Application service for registration, credential checks and profiles.
#[derive(Clone)]
pub struct UserService {
    user_repository: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    /// Creates a new user service.
    #[must_use]
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            user_repository,
            password_hasher,
        }
    }
}

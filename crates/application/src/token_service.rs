//! Bearer token issuance and verification.
//!
//! Claims are a snapshot of the user at sign-in time. Verification only
//! trusts the subject and re-reads the user from the repository.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::warn;
use vocal_coach_core::{AppError, AppResult, UserId, UserIdentity};
use vocal_coach_domain::Gender;

use crate::{UserRecord, UserRepository};


/// Default access token lifetime.
const DEFAULT_TOKEN_TTL_DAYS: i64 = 30;

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessTokenClaims {
    /// User identifier rendered as a string subject.
    pub subject: String,
    /// Email at issue time.
    pub email: String,
    /// Display name at issue time.
    pub display_name: String,
    /// Gender at issue time.
    pub gender: Gender,
    /// Issue instant.
    pub issued_at: DateTime<Utc>,
    /// Expiry instant.
    pub expires_at: DateTime<Utc>,
}

/// Port for signing and verifying access tokens.
pub trait TokenCodec: Send + Sync {
    /// Signs claims into a compact token string.
    fn encode(&self, claims: &AccessTokenClaims) -> AppResult<String>;

    /// Verifies the signature and expiry of a token and returns its claims.
    ///
    /// Must fail with `AppError::Unauthorized` for any invalid token.
    fn decode(&self, token: &str) -> AppResult<AccessTokenClaims>;
}

/// A freshly signed access token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// Compact signed token.
    pub access_token: String,
}

/// Issues access tokens and resolves them back to the current user.
#[derive(Clone)]
pub struct TokenService {
    token_codec: Arc<dyn TokenCodec>,
    user_repository: Arc<dyn UserRepository>,
    token_ttl: Duration,
}

impl TokenService {
    /// Creates a token service with the default 30 day lifetime.
    #[must_use]
    pub fn new(
        token_codec: Arc<dyn TokenCodec>,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            token_codec,
            user_repository,
            token_ttl: Duration::days(DEFAULT_TOKEN_TTL_DAYS),
        }
    }

    /// Overrides the token lifetime.
    #[must_use]
    pub fn with_token_ttl(mut self, token_ttl: Duration) -> Self {
        self.token_ttl = token_ttl;
        self
    }

    /// Signs a time-limited token for an authenticated user.
    pub fn issue_token(&self, user: &UserRecord) -> AppResult<IssuedToken> {
        let issued_at = Utc::now();
        let expires_at = issued_at
            .checked_add_signed(self.token_ttl)
            .ok_or_else(|| {
                AppError::Internal(format!(
                    "token lifetime of {} days overflows the expiry timestamp",
                    self.token_ttl.num_days()
                ))
            })?;

        let access_token = self.token_codec.encode(&AccessTokenClaims {
            subject: user.id.to_string(),
            email: user.email.clone(),
            display_name: user.display_name.clone(),
            gender: user.gender,
            issued_at,
            expires_at,
        })?;

        Ok(IssuedToken { access_token })
    }

    /// Verifies a bearer token and returns the identity of its still-active
    /// subject.
    pub async fn authenticate(&self, token: &str) -> AppResult<UserIdentity> {
        let claims = self.token_codec.decode(token)?;

        if claims.expires_at <= Utc::now() {
            return Err(AppError::Unauthorized("token has expired".to_owned()));
        }

        let user_id = claims.subject.parse::<UserId>().map_err(|_| {
            warn!(subject = %claims.subject, "token subject is not a user id");
            AppError::Unauthorized("invalid token subject".to_owned())
        })?;

        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| {
                warn!(%user_id, "token subject no longer resolves to an active user");
                AppError::Unauthorized("authentication required".to_owned())
            })?;

        Ok(UserIdentity::new(user.id, user.display_name))
    }
}

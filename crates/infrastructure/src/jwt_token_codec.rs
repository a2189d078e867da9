//! HS256 JSON Web Token codec.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;
use vocal_coach_application::{AccessTokenClaims, TokenCodec};
use vocal_coach_core::{AppError, AppResult};
use vocal_coach_domain::Gender;

/// Wire form of the access token claims.
#[derive(Debug, Serialize, Deserialize)]
struct JwtClaims {
    sub: String,
    email: String,
    #[serde(rename = "displayName")]
    display_name: String,
    gender: Gender,
    iat: i64,
    exp: i64,
    jti: String,
}

/// Signs and verifies access tokens with a shared HMAC secret.
#[derive(Clone)]
pub struct JwtTokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenCodec {
    /// Creates a codec for the given signing secret.
    pub fn new(secret: &str) -> AppResult<Self> {
        if secret.trim().is_empty() {
            return Err(AppError::Validation(
                "JWT_SECRET must not be empty".to_owned(),
            ));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub", "iat"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        })
    }
}

impl TokenCodec for JwtTokenCodec {
    fn encode(&self, claims: &AccessTokenClaims) -> AppResult<String> {
        let wire = JwtClaims {
            sub: claims.subject.clone(),
            email: claims.email.clone(),
            display_name: claims.display_name.clone(),
            gender: claims.gender,
            iat: claims.issued_at.timestamp(),
            exp: claims.expires_at.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &wire, &self.encoding_key)
            .map_err(|error| AppError::Internal(format!("failed to sign access token: {error}")))
    }

    fn decode(&self, token: &str) -> AppResult<AccessTokenClaims> {
        let wire = decode::<JwtClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|error| {
                debug!(%error, "access token rejected");
                AppError::Unauthorized("invalid or expired token".to_owned())
            })?
            .claims;

        Ok(AccessTokenClaims {
            subject: wire.sub,
            email: wire.email,
            display_name: wire.display_name,
            gender: wire.gender,
            issued_at: timestamp(wire.iat)?,
            expires_at: timestamp(wire.exp)?,
        })
    }
}

fn timestamp(seconds: i64) -> AppResult<DateTime<Utc>> {
    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| AppError::Unauthorized("invalid token timestamp".to_owned()))
}

use std::str::FromStr;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use vocal_coach_application::{CredentialCheck, RegisterParams};
use vocal_coach_core::AppError;
use vocal_coach_domain::Gender;

use crate::dto::{LoginRequest, LoginResponse, RegisterRequest, RegisteredUserResponse};
use crate::error::ApiResult;
use crate::extract::ApiJson;
use crate::state::AppState;

/// POST /auth/register - Create an account.
pub async fn register_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<RegisteredUserResponse>)> {
    let gender = Gender::from_str(payload.gender.as_str())?;

    let user = state
        .user_service
        .register(RegisterParams {
            email: payload.email,
            password: payload.password,
            display_name: payload.display_name,
            gender,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(RegisteredUserResponse::from(user))))
}

/// POST /auth/login - Exchange credentials for a bearer token.
///
/// Unknown email and wrong password produce the same response.
pub async fn login_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let check = state
        .user_service
        .validate_credentials(&payload.email, &payload.password)
        .await?;

    let CredentialCheck::Matched(user) = check else {
        return Err(AppError::Unauthorized("invalid email or password".to_owned()).into());
    };

    let issued = state.token_service.issue_token(&user)?;

    Ok(Json(LoginResponse {
        access_token: issued.access_token,
    }))
}

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use tracing::warn;
use vocal_coach_core::AppError;

use crate::error::ApiResult;
use crate::state::AppState;

/// Resolves the bearer token to a current user and stores the identity in
/// request extensions for handlers.
pub async fn require_bearer_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(bearer_token)
        .ok_or_else(|| AppError::Unauthorized("authentication required".to_owned()))?;

    let identity = state
        .token_service
        .authenticate(token)
        .await
        .inspect_err(|error| {
            warn!(%error, path = %request.uri().path(), "bearer token rejected");
        })?;

    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}

fn bearer_token(header_value: &str) -> Option<&str> {
    let (scheme, token) = header_value.trim().split_once(' ')?;
    let token = token.trim();

    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

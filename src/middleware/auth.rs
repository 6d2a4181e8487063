use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::auth::{verify_jwt, Claims};
use crate::error::ApiError;
use crate::AppState;

/// Authenticated caller context extracted from a verified token.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub sub: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self { sub: claims.sub }
    }
}

/// Bearer-token middleware for the protected product routes. Any validly
/// signed token grants access; there is no role or permission check. Failures
/// short-circuit with 401 before any store operation runs.
pub async fn bearer_auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&headers).ok_or_else(unauthorized)?;

    let claims = verify_jwt(token, &state.jwt_secret).map_err(|e| {
        tracing::debug!("token verification failed: {}", e);
        unauthorized()
    })?;

    // Hand the decoded claims to downstream handlers
    request.extensions_mut().insert(AuthUser::from(claims));

    Ok(next.run(request).await)
}

fn unauthorized() -> ApiError {
    ApiError::unauthorized("Unauthorized")
}

fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let auth_str = headers.get("authorization")?.to_str().ok()?;
    let token = auth_str.strip_prefix("Bearer ")?.trim();

    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

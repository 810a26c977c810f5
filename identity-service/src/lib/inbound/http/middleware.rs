use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use axum::Extension;

use crate::access::errors::AccessError;
use crate::access::guard::authorize;
use crate::access::models::UserClaims;
use crate::access::ports::AccessServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;
use crate::user::models::Role;

/// Middleware that verifies the bearer token and puts the caller's
/// [`UserClaims`] into the request extensions.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(req.headers())?.to_string();

    let claims = state.access_service.verify_token(&token).await?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// Middleware that lets the request through only for the role it was built with.
///
/// Must run after [`authenticate`]; without claims in the extensions the
/// request is rejected.
pub async fn require_role(
    State(required): State<Role>,
    claims: Option<Extension<UserClaims>>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Extension(claims) = claims.ok_or(AccessError::Unauthenticated)?;

    authorize(&claims, required)?;

    Ok(next.run(req).await)
}

fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, AccessError> {
    let auth_header = headers.get(AUTHORIZATION).ok_or_else(|| {
        tracing::debug!("Missing Authorization header");
        AccessError::Unauthenticated
    })?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| AccessError::Unauthenticated)?;

    auth_str
        .split_once(' ')
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
        .map(|(_, token)| token.trim())
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            tracing::debug!("Authorization header is not a bearer token");
            AccessError::Unauthenticated
        })
}

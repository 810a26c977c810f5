use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::health::health;
use super::handlers::list_users::list_users;
use super::handlers::login::login;
use super::handlers::profile::profile;
use super::handlers::verify_token::verify_token;
use super::middleware::authenticate;
use super::middleware::require_role;
use crate::domain::access::service::AccessService;
use crate::outbound::repositories::InMemoryUserRepository;
use crate::user::models::Role;

#[derive(Clone)]
pub struct AppState {
    pub access_service: Arc<AccessService<InMemoryUserRepository>>,
}

pub fn create_router(access_service: Arc<AccessService<InMemoryUserRepository>>) -> Router {
    let state = AppState { access_service };

    let public_routes = Router::new()
        .route("/api/login", post(login))
        .route("/api/health", get(health));

    let protected_routes = Router::new()
        .route("/api/profile", get(profile))
        .route("/api/verify", get(verify_token))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    // Layers run outermost-first: authenticate, then the role check.
    let admin_routes = Router::new()
        .route("/api/admin/users", get(list_users))
        .route_layer(middleware::from_fn_with_state(Role::Admin, require_role))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .merge(admin_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use auth::Authenticator;
    use auth::PasswordHasher;
    use auth::TokenPolicy;
    use axum::body::to_bytes;
    use axum::http::header::AUTHORIZATION;
    use axum::http::header::CONTENT_TYPE;
    use axum::http::StatusCode;
    use tower::ServiceExt;

    use super::*;
    use crate::config::UserSeedConfig;

    fn router() -> Router {
        let hasher = PasswordHasher::with_cost(64, 1, 1).unwrap();
        let repository =
            InMemoryUserRepository::from_seeds(&UserSeedConfig::demo_users(), &hasher).unwrap();
        let authenticator = Authenticator::with_hasher(
            b"test-secret-key-for-jwt-signing-at-least-32-bytes",
            TokenPolicy::new("test-issuer", "test-audience"),
            hasher,
        );

        create_router(Arc::new(AccessService::new(
            Arc::new(repository),
            Arc::new(authenticator),
        )))
    }

    async fn send(router: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn login_token(router: &Router, email: &str) -> String {
        let request = Request::post("/api/login")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(
                serde_json::json!({ "email": email, "password": "password" }).to_string(),
            ))
            .unwrap();

        let (status, body) = send(router, request).await;
        assert_eq!(status, StatusCode::OK);
        body["data"]["token"].as_str().unwrap().to_string()
    }

    fn get_with_token(uri: &str, token: &str) -> Request<Body> {
        Request::get(uri)
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_is_public() {
        let router = router();
        let (status, body) = send(
            &router,
            Request::get("/api/health").body(Body::empty()).unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_admin_route_runs_authentication_before_role_check() {
        let router = router();

        // No token at all: 401, not 403.
        let (status, _) = send(
            &router,
            Request::get("/api/admin/users").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let token = login_token(&router, "developer@example.com").await;
        let (status, body) = send(&router, get_with_token("/api/admin/users", &token)).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_admin_lists_users_without_hashes() {
        let router = router();
        let token = login_token(&router, "admin@example.com").await;

        let (status, body) = send(&router, get_with_token("/api/admin/users", &token)).await;
        assert_eq!(status, StatusCode::OK);

        let users = body["data"]["users"].as_array().unwrap();
        assert_eq!(users.len(), 3);
        for user in users {
            assert!(user.get("password_hash").is_none());
            assert!(user.get("passwordHash").is_none());
        }
    }

    #[tokio::test]
    async fn test_verify_returns_claims() {
        let router = router();
        let token = login_token(&router, "client@example.com").await;

        let (status, body) = send(&router, get_with_token("/api/verify", &token)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Token is valid");
        assert_eq!(body["data"]["user"]["userId"], 3);
        assert_eq!(body["data"]["user"]["role"], "client");
    }
}

use std::sync::Arc;

use auth::Authenticator;
use auth::JwtHandler;
use auth::PasswordHasher;
use identity_service::config::JwtConfig;
use identity_service::config::UserSeedConfig;
use identity_service::domain::access::service::AccessService;
use identity_service::inbound::http::router::create_router;
use identity_service::outbound::repositories::InMemoryUserRepository;
use serde_json::json;

pub const JWT_SECRET: &str = "test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub jwt_config: JwtConfig,
    pub jwt_handler: JwtHandler,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let jwt_config = JwtConfig {
            secret: JWT_SECRET.to_string(),
            issuer: "identity-service-test".to_string(),
            audience: "identity-clients-test".to_string(),
            expiration_hours: 4,
            max_age_hours: 4,
            leeway_seconds: 15,
        };

        // Cheap hashing cost keeps the suite fast
        let hasher = PasswordHasher::with_cost(64, 1, 1).expect("Failed to build hasher");
        let user_repository = Arc::new(
            InMemoryUserRepository::from_seeds(&UserSeedConfig::demo_users(), &hasher)
                .expect("Failed to seed users"),
        );

        let authenticator = Arc::new(Authenticator::with_hasher(
            JWT_SECRET.as_bytes(),
            jwt_config.token_policy().expect("Invalid token policy"),
            hasher,
        ));

        let access_service = Arc::new(AccessService::new(user_repository, authenticator));
        let router = create_router(access_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        let jwt_handler = JwtHandler::new(
            JWT_SECRET.as_bytes(),
            jwt_config.token_policy().expect("Invalid token policy"),
        );

        Self {
            address,
            api_client: reqwest::Client::new(),
            jwt_config,
            jwt_handler,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(&format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(&format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Log in and return the raw response
    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/api/login")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Log in with the demo password and return the token
    pub async fn login_token(&self, email: &str) -> String {
        let response = self.login(email, "password").await;
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["token"]
            .as_str()
            .expect("Missing token")
            .to_string()
    }
}

use std::sync::Arc;

use auth::Authenticator;
use identity_service::config::Config;
use identity_service::domain::access::service::AccessService;
use identity_service::inbound::http::router::create_router;
use identity_service::outbound::repositories::InMemoryUserRepository;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const MIN_SECRET_BYTES: usize = 32;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "identity_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "identity-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;
    let policy = config.jwt.token_policy()?;

    tracing::info!(
        http_port = config.server.http_port,
        issuer = %policy.issuer,
        audience = %policy.audience,
        token_lifetime_hours = policy.lifetime.num_hours(),
        "Configuration loaded"
    );

    if config.jwt.secret.len() < MIN_SECRET_BYTES {
        tracing::warn!(
            length = config.jwt.secret.len(),
            minimum = MIN_SECRET_BYTES,
            "JWT secret is shorter than recommended for HS256"
        );
    }

    let hasher = config.hashing.hasher()?;
    let user_repository = Arc::new(InMemoryUserRepository::from_seeds(
        &config.seed_users(),
        &hasher,
    )?);
    tracing::info!(users = user_repository.len(), "User store loaded");

    let authenticator = Arc::new(Authenticator::with_hasher(
        config.jwt.secret.as_bytes(),
        policy,
        hasher,
    ));

    let access_service = Arc::new(AccessService::new(user_repository, authenticator));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(access_service);

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");
    Ok(())
}

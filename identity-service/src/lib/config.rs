use std::env;

use auth::PasswordError;
use auth::PasswordHasher;
use auth::TokenPolicy;
use chrono::Duration;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub hashing: HashingConfig,
    #[serde(default)]
    pub users: Vec<UserSeedConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "JwtConfig::default_issuer")]
    pub issuer: String,
    #[serde(default = "JwtConfig::default_audience")]
    pub audience: String,
    #[serde(default = "JwtConfig::default_hours")]
    pub expiration_hours: i64,
    #[serde(default = "JwtConfig::default_hours")]
    pub max_age_hours: i64,
    #[serde(default = "JwtConfig::default_leeway_seconds")]
    pub leeway_seconds: i64,
}

impl JwtConfig {
    fn default_issuer() -> String {
        "identity-service".to_string()
    }

    fn default_audience() -> String {
        "identity-clients".to_string()
    }

    fn default_hours() -> i64 {
        TokenPolicy::DEFAULT_LIFETIME_HOURS
    }

    fn default_leeway_seconds() -> i64 {
        TokenPolicy::DEFAULT_LEEWAY_SECONDS
    }

    /// Token rules described by this section.
    ///
    /// # Errors
    /// * `ConfigError::Message` - A duration is negative or out of range
    pub fn token_policy(&self) -> Result<TokenPolicy, ConfigError> {
        let lifetime = Self::duration(
            "jwt.expiration_hours",
            self.expiration_hours,
            Duration::try_hours,
        )?;
        let max_age = Self::duration("jwt.max_age_hours", self.max_age_hours, Duration::try_hours)?;
        let leeway = Self::duration(
            "jwt.leeway_seconds",
            self.leeway_seconds,
            Duration::try_seconds,
        )?;

        Ok(TokenPolicy::new(&self.issuer, &self.audience)
            .with_lifetime(lifetime)
            .with_max_age(max_age)
            .with_leeway(leeway))
    }

    fn duration(
        key: &str,
        value: i64,
        convert: fn(i64) -> Option<Duration>,
    ) -> Result<Duration, ConfigError> {
        if value < 0 {
            return Err(ConfigError::Message(format!(
                "{} must not be negative, got {}",
                key, value
            )));
        }

        convert(value)
            .ok_or_else(|| ConfigError::Message(format!("{} is out of range: {}", key, value)))
    }
}

/// Argon2id cost used when hashing seed passwords.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct HashingConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashingConfig {
    fn default() -> Self {
        // Argon2id defaults (19 MiB, 2 passes, 1 lane)
        Self {
            memory_kib: 19 * 1024,
            iterations: 2,
            parallelism: 1,
        }
    }
}

impl HashingConfig {
    pub fn hasher(&self) -> Result<PasswordHasher, PasswordError> {
        PasswordHasher::with_cost(self.memory_kib, self.iterations, self.parallelism)
    }
}

/// Static user entry. The password is hashed once at start-up.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct UserSeedConfig {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: String,
    pub password: String,
}

impl UserSeedConfig {
    /// Built-in demo accounts, all with password `password`.
    pub fn demo_users() -> Vec<Self> {
        [
            (1, "admin@example.com", "Admin User", "admin"),
            (2, "developer@example.com", "Developer User", "developer"),
            (3, "client@example.com", "Client User", "client"),
        ]
        .into_iter()
        .map(|(id, email, name, role)| Self {
            id,
            email: email.to_string(),
            name: name.to_string(),
            role: role.to_string(),
            password: "password".to_string(),
        })
        .collect()
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (JWT__SECRET, SERVER__HTTP_PORT, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        Self::layered(&run_mode, Environment::default().separator("__"))
    }

    fn layered(run_mode: &str, environment: Environment) -> Result<Self, ConfigError> {
        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(environment)
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.jwt.token_policy()?;

        Ok(config)
    }

    /// Configured users, or the demo accounts when none are configured.
    pub fn seed_users(&self) -> Vec<UserSeedConfig> {
        if self.users.is_empty() {
            UserSeedConfig::demo_users()
        } else {
            self.users.clone()
        }
    }
}

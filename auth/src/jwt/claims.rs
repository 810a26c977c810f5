use chrono::Duration;
use serde::Deserialize;
use serde::Serialize;

/// JWT claims: registered time and origin claims plus a service payload.
///
/// The payload is flattened into the token, so a payload struct with
/// `userId` and `role` fields ends up next to `iss`, `exp` and friends.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims<T> {
    /// Service defined payload
    #[serde(flatten)]
    pub payload: T,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Not before (Unix timestamp)
    pub nbf: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl<T> Claims<T> {
    /// Build claims valid from `issued_at` for `lifetime`.
    ///
    /// `nbf` is set to the issue time.
    pub fn new(
        payload: T,
        issuer: impl ToString,
        audience: impl ToString,
        issued_at: i64,
        lifetime: Duration,
    ) -> Self {
        Self {
            payload,
            iss: issuer.to_string(),
            aud: audience.to_string(),
            iat: issued_at,
            nbf: issued_at,
            exp: issued_at + lifetime.num_seconds(),
        }
    }

    /// Override the expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = exp;
        self
    }

    /// Override the not-before time (Unix timestamp).
    pub fn with_not_before(mut self, nbf: i64) -> Self {
        self.nbf = nbf;
        self
    }

    /// Seconds elapsed since issuance.
    pub fn age(&self, current_timestamp: i64) -> i64 {
        current_timestamp - self.iat
    }

    /// Check if token is expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

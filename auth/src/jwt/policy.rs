use chrono::Duration;

/// Rules a token must satisfy beyond a valid signature.
///
/// Issuer and audience identify this service and its clients; a token minted
/// for another service with the same secret is still rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPolicy {
    pub issuer: String,
    pub audience: String,
    /// Time from issuance to `exp`
    pub lifetime: Duration,
    /// Upper bound on `now - iat`, checked independently of `exp`
    pub max_age: Duration,
    /// Clock skew tolerated on every time comparison
    pub leeway: Duration,
}

impl TokenPolicy {
    pub const DEFAULT_LIFETIME_HOURS: i64 = 4;
    pub const DEFAULT_LEEWAY_SECONDS: i64 = 15;

    /// Policy with the default four hour lifetime and max age, and 15s leeway.
    pub fn new(issuer: impl ToString, audience: impl ToString) -> Self {
        Self {
            issuer: issuer.to_string(),
            audience: audience.to_string(),
            lifetime: Duration::hours(Self::DEFAULT_LIFETIME_HOURS),
            max_age: Duration::hours(Self::DEFAULT_LIFETIME_HOURS),
            leeway: Duration::seconds(Self::DEFAULT_LEEWAY_SECONDS),
        }
    }

    pub fn with_lifetime(mut self, lifetime: Duration) -> Self {
        self.lifetime = lifetime;
        self
    }

    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = max_age;
        self
    }

    pub fn with_leeway(mut self, leeway: Duration) -> Self {
        self.leeway = leeway;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let policy = TokenPolicy::new("svc", "clients");

        assert_eq!(policy.lifetime, Duration::hours(4));
        assert_eq!(policy.max_age, Duration::hours(4));
        assert_eq!(policy.leeway, Duration::seconds(15));
    }

    #[test]
    fn test_builder_pattern() {
        let policy = TokenPolicy::new("svc", "clients")
            .with_lifetime(Duration::minutes(30))
            .with_max_age(Duration::hours(1))
            .with_leeway(Duration::zero());

        assert_eq!(policy.issuer, "svc");
        assert_eq!(policy.audience, "clients");
        assert_eq!(policy.lifetime, Duration::minutes(30));
        assert_eq!(policy.max_age, Duration::hours(1));
        assert_eq!(policy.leeway, Duration::zero());
    }
}

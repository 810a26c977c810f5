use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::claims::Claims;
use super::errors::JwtError;
use super::policy::TokenPolicy;

/// JWT token handler for issuing and verifying tokens.
///
/// Generic over the payload type so each service defines its own claims.
/// Uses HS256 (HMAC with SHA-256) only; tokens announcing any other
/// algorithm are rejected.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    policy: TokenPolicy,
}

impl JwtHandler {
    /// Create a new JWT handler with a secret key and token policy.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Anyone holding the secret can mint valid tokens for any user
    pub fn new(secret: &[u8], policy: TokenPolicy) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            policy,
        }
    }

    pub fn policy(&self) -> &TokenPolicy {
        &self.policy
    }

    /// Sign arbitrary claims as they are.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Issue a token for `payload`, valid from now for the policy lifetime.
    pub fn issue<T: Serialize>(&self, payload: T) -> Result<String, JwtError> {
        self.issue_at(payload, Utc::now().timestamp())
    }

    /// Issue a token as if the current time were `issued_at`.
    pub fn issue_at<T: Serialize>(&self, payload: T, issued_at: i64) -> Result<String, JwtError> {
        let claims = Claims::new(
            payload,
            &self.policy.issuer,
            &self.policy.audience,
            issued_at,
            self.policy.lifetime,
        );

        self.encode(&claims)
    }

    /// Check the signature and decode the claims, nothing else.
    ///
    /// # Errors
    /// * `InvalidSignature` - Signature does not match the secret
    /// * `DecodingFailed` - Token is malformed, a registered claim is absent,
    ///   or the payload does not fit `T`
    pub fn decode<T: DeserializeOwned>(&self, token: &str) -> Result<Claims<T>, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp", "nbf", "iss", "aud"]);

        decode::<Claims<T>>(token, &self.decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                _ => JwtError::DecodingFailed(e.to_string()),
            })
    }

    /// Fully verify a token against the policy at the current time.
    pub fn verify<T: DeserializeOwned>(&self, token: &str) -> Result<Claims<T>, JwtError> {
        self.verify_at(token, Utc::now().timestamp())
    }

    /// Fully verify a token against the policy as if the current time were `now`.
    ///
    /// Checks run in order and stop at the first failure: signature,
    /// expiry and not-before, maximum age, issuer, audience.
    pub fn verify_at<T: DeserializeOwned>(
        &self,
        token: &str,
        now: i64,
    ) -> Result<Claims<T>, JwtError> {
        let claims = self.decode::<T>(token)?;
        let leeway = self.policy.leeway.num_seconds();

        if claims.exp + leeway < now {
            return Err(JwtError::TokenExpired);
        }
        if claims.nbf - leeway > now || claims.iat - leeway > now {
            return Err(JwtError::TokenNotYetValid);
        }

        if claims.age(now) > self.policy.max_age.num_seconds() + leeway {
            return Err(JwtError::TokenTooOld);
        }

        if claims.iss != self.policy.issuer {
            return Err(JwtError::InvalidIssuer(claims.iss));
        }
        if claims.aud != self.policy.audience {
            return Err(JwtError::InvalidAudience(claims.aud));
        }

        Ok(claims)
    }
}

//! JWT access-token generation and validation.
//!
//! Access tokens are HS256-signed JWTs containing a [`Claims`] payload. They
//! are self-contained: validation needs only the shared secret and a clock, so
//! there is no server-side session table.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use notekeep_core::error::CoreError;
use notekeep_core::types::DbId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{parse_var, ConfigError};

/// JWT claims embedded in every access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the user's internal database id.
    pub sub: DbId,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4) for audit.
    pub jti: String,
}

/// Configuration for JWT token generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Access token lifetime in minutes (default: 120).
    pub access_token_expiry_mins: i64,
}

/// Default access token expiry in minutes.
const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 120;

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var                    | Required | Default |
    /// |----------------------------|----------|---------|
    /// | `JWT_SECRET`               | **yes**  | --      |
    /// | `JWT_ACCESS_EXPIRY_MINS`   | no       | `120`   |
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret =
            std::env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?;
        if secret.trim().is_empty() {
            return Err(ConfigError::Invalid {
                var: "JWT_SECRET",
                value: secret,
            });
        }

        let access_token_expiry_mins: i64 =
            parse_var("JWT_ACCESS_EXPIRY_MINS", DEFAULT_ACCESS_EXPIRY_MINS)?;
        if access_token_expiry_mins <= 0 {
            return Err(ConfigError::Invalid {
                var: "JWT_ACCESS_EXPIRY_MINS",
                value: access_token_expiry_mins.to_string(),
            });
        }

        Ok(Self {
            secret,
            access_token_expiry_mins,
        })
    }

    /// Access token lifetime in seconds.
    pub fn access_token_ttl_secs(&self) -> i64 {
        self.access_token_expiry_mins * 60
    }
}

/// Generate an HS256 access token for the given user, issued now.
pub fn generate_access_token(
    user_id: DbId,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    generate_access_token_at(user_id, config, chrono::Utc::now().timestamp())
}

/// Generate an access token as if issued at Unix time `now`.
pub fn generate_access_token_at(
    user_id: DbId,
    config: &JwtConfig,
    now: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        sub: user_id,
        exp: now + config.access_token_ttl_secs(),
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate an access token against the current time.
pub fn validate_token(token: &str, config: &JwtConfig) -> Result<Claims, CoreError> {
    validate_token_at(token, config, chrono::Utc::now().timestamp())
}

/// Validate an access token against Unix time `now`.
///
/// Signature and format problems yield [`CoreError::TokenInvalid`]; a token
/// whose `exp` is at or before `now` yields [`CoreError::TokenExpired`]. No
/// leeway is applied.
pub fn validate_token_at(token: &str, config: &JwtConfig, now: i64) -> Result<Claims, CoreError> {
    let mut validation = Validation::new(Algorithm::HS256);
    // Expiry is compared against the injected clock below.
    validation.validate_exp = false;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map_err(|_| CoreError::TokenInvalid)?;

    if token_data.claims.exp <= now {
        return Err(CoreError::TokenExpired);
    }
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    /// Two hours, the default lifetime.
    const TTL_SECS: i64 = 2 * 60 * 60;

    /// Helper to build a test config with a known secret.
    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: DEFAULT_ACCESS_EXPIRY_MINS,
        }
    }

    #[test]
    fn test_generate_and_validate_access_token() {
        let config = test_config();
        let token = generate_access_token(42, &config).expect("token generation should succeed");

        let claims = validate_token(&token, &config).expect("token validation should succeed");
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.exp - claims.iat, TTL_SECS);
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn test_token_expires_after_ttl() {
        let config = test_config();
        let issued_at = 1_700_000_000;
        let token = generate_access_token_at(7, &config, issued_at).unwrap();

        let claims = validate_token_at(&token, &config, issued_at).unwrap();
        assert_eq!(claims.sub, 7);

        let claims = validate_token_at(&token, &config, issued_at + TTL_SECS - 1).unwrap();
        assert_eq!(claims.sub, 7);

        let err = validate_token_at(&token, &config, issued_at + TTL_SECS).unwrap_err();
        assert_matches!(err, CoreError::TokenExpired);
    }

    #[test]
    fn test_different_secrets_fail() {
        let config_a = JwtConfig {
            secret: "secret-alpha".to_string(),
            access_token_expiry_mins: 15,
        };
        let config_b = JwtConfig {
            secret: "secret-bravo".to_string(),
            access_token_expiry_mins: 15,
        };

        let token = generate_access_token(1, &config_a).expect("token generation should succeed");

        let err = validate_token(&token, &config_b).unwrap_err();
        assert_matches!(err, CoreError::TokenInvalid);
    }

    #[test]
    fn test_malformed_token_is_invalid_not_expired() {
        let config = test_config();
        assert_matches!(
            validate_token("not.a.jwt", &config),
            Err(CoreError::TokenInvalid)
        );
        assert_matches!(validate_token("", &config), Err(CoreError::TokenInvalid));
    }

    #[test]
    fn test_tampered_payload_fails() {
        let config = test_config();
        let token = generate_access_token(1, &config).unwrap();
        let other = generate_access_token(2, &config).unwrap();

        // Splice the second token's payload onto the first token's signature.
        let mut parts: Vec<&str> = token.split('.').collect();
        let other_parts: Vec<&str> = other.split('.').collect();
        parts[1] = other_parts[1];
        let forged = parts.join(".");

        assert_matches!(
            validate_token(&forged, &config),
            Err(CoreError::TokenInvalid)
        );
    }
}

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::SecurityConfig;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub authorized: bool,
    pub user: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    /// Fixed claim set issued by GET /jwt. The service has no user accounts;
    /// "username" is the only subject there is.
    pub fn new(security: &SecurityConfig) -> Self {
        let now = Utc::now();
        let exp = (now + Duration::minutes(security.jwt_expiry_minutes)).timestamp();

        Self {
            authorized: true,
            user: "username".to_string(),
            exp,
            iat: now.timestamp(),
        }
    }
}

pub fn sign(claims: &Claims, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    encode(&Header::default(), claims, &encoding_key)
}

/// Verify a token against the same symmetric secret used for issuance.
/// Expiry is checked; there is no issuer or audience to validate.
pub fn verify(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let token_data = decode::<Claims>(token, &decoding_key, &Validation::default())?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_security() -> SecurityConfig {
        SecurityConfig {
            jwt_secret: "test-secret".to_string(),
            jwt_expiry_minutes: 100,
        }
    }

    #[test]
    fn issued_token_verifies_with_same_secret() {
        let security = test_security();
        let claims = Claims::new(&security);
        let token = sign(&claims, &security.jwt_secret).unwrap();

        let decoded = verify(&token, &security.jwt_secret).unwrap();
        assert!(decoded.authorized);
        assert_eq!(decoded.user, "username");
        assert_eq!(decoded.exp, claims.exp);
    }

    #[test]
    fn token_rejected_with_wrong_secret() {
        let security = test_security();
        let token = sign(&Claims::new(&security), &security.jwt_secret).unwrap();

        assert!(verify(&token, "other-secret").is_err());
    }

    #[test]
    fn expiry_is_one_hundred_minutes_out() {
        let security = test_security();
        let claims = Claims::new(&security);
        assert_eq!(claims.exp - claims.iat, 100 * 60);
    }
}

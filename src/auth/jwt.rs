use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use super::claims::Claims;

/// Token lifetime in seconds (7 days)
const TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;

pub fn sign_token(user_id: Uuid, email: &str, secret: &str) -> Result<String, String> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        iat: now,
        exp: now + TOKEN_TTL_SECS,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| format!("Failed to sign token: {}", e))
}

pub fn validate_token(token: &str, secret: &str) -> Result<Claims, String> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| format!("JWT validation failed: {}", e))?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_and_validate_token() {
        let secret = "test_secret_key_for_testing_purposes";
        let user_id = Uuid::new_v4();

        let token = sign_token(user_id, "test@example.com", secret).unwrap();
        let claims = validate_token(&token, secret).unwrap();

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.email, "test@example.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_token_with_wrong_secret() {
        let token = sign_token(Uuid::new_v4(), "test@example.com", "right_secret").unwrap();
        let result = validate_token(&token, "wrong_secret");

        assert!(result.is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        let result = validate_token("not-a-jwt", "secret");

        assert!(result.is_err());
    }
}

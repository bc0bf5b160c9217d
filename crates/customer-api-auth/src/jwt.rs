use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use customer_api_config::JwtConfig;
use customer_api_core::AppError;
use customer_api_models::Customer;

use crate::claims::Claims;

/// Creates a signed access token for `customer`.
///
/// The subject is the customer's email and the `role` claim is the stored
/// role. The token expires `jwt_config.access_token_expiry` seconds after
/// issuance.
pub fn create_access_token(customer: &Customer, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.access_token_expiry as usize;

    let claims = Claims {
        sub: customer.email.clone(),
        role: customer.role,
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Verifies signature and expiry and returns the embedded claims.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired token"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use customer_api_models::CustomerRole;

    fn config(secret: &str) -> JwtConfig {
        JwtConfig {
            secret: secret.to_string(),
            access_token_expiry: 10800,
        }
    }

    fn customer(role: CustomerRole) -> Customer {
        Customer {
            id: 1,
            name: "Maria".to_string(),
            phone: None,
            national_id: None,
            email: "maria@example.com".to_string(),
            password_hash: String::new(),
            role,
        }
    }

    #[test]
    fn test_token_round_trip_carries_email_and_role() {
        let jwt_config = config("test_secret");
        let token = create_access_token(&customer(CustomerRole::Administrator), &jwt_config).unwrap();

        let claims = verify_token(&token, &jwt_config).unwrap();

        assert_eq!(claims.sub, "maria@example.com");
        assert_eq!(claims.role, CustomerRole::Administrator);
        assert_eq!(claims.exp - claims.iat, 10800);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = create_access_token(&customer(CustomerRole::Editor), &config("one")).unwrap();

        let err = verify_token(&token, &config("two")).unwrap_err();

        assert_eq!(err.status.as_u16(), 401);
    }

    #[test]
    fn test_expired_token_rejected() {
        let jwt_config = config("test_secret");
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            sub: "maria@example.com".to_string(),
            role: CustomerRole::Editor,
            iat: now - 4 * 3600,
            exp: now - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
        )
        .unwrap();

        assert!(verify_token(&token, &jwt_config).is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(verify_token("not.a.token", &config("test_secret")).is_err());
        assert!(verify_token("", &config("test_secret")).is_err());
    }
}

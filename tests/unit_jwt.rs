use customer_api::config::jwt::JwtConfig;
use customer_api::modules::auth::model::Claims;
use customer_api::utils::jwt::{create_access_token, verify_token};
use customer_api_models::{Customer, CustomerRole};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

fn get_test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 10800,
    }
}

fn test_customer(role: CustomerRole) -> Customer {
    Customer {
        id: 42,
        name: "Test Customer".to_string(),
        phone: None,
        national_id: None,
        email: "test@example.com".to_string(),
        password_hash: String::new(),
        role,
    }
}

#[test]
fn test_create_access_token_all_roles() {
    let jwt_config = get_test_jwt_config();

    for role in [CustomerRole::Editor, CustomerRole::Administrator] {
        let token = create_access_token(&test_customer(role), &jwt_config).unwrap();
        let claims = verify_token(&token, &jwt_config).unwrap();

        assert_eq!(claims.sub, "test@example.com");
        assert_eq!(claims.role, role);
    }
}

#[test]
fn test_token_is_hs256_with_three_hour_expiry() {
    let jwt_config = get_test_jwt_config();
    let token = create_access_token(&test_customer(CustomerRole::Editor), &jwt_config).unwrap();

    let data = decode::<Claims>(
        &token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .unwrap();

    assert_eq!(data.header.alg, Algorithm::HS256);
    assert_eq!(data.claims.exp - data.claims.iat, 3 * 60 * 60);

    let now = chrono::Utc::now().timestamp() as usize;
    assert!(data.claims.iat <= now && data.claims.iat + 5 >= now);
}

#[test]
fn test_role_claim_is_plain_string() {
    let jwt_config = get_test_jwt_config();
    let token =
        create_access_token(&test_customer(CustomerRole::Administrator), &jwt_config).unwrap();

    let data = decode::<serde_json::Value>(
        &token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .unwrap();

    assert_eq!(data.claims["role"], "administrator");
    assert_eq!(data.claims["sub"], "test@example.com");
}

#[test]
fn test_verify_token_wrong_secret() {
    let token =
        create_access_token(&test_customer(CustomerRole::Editor), &get_test_jwt_config()).unwrap();

    let wrong_jwt_config = JwtConfig {
        secret: "different_secret_key".to_string(),
        access_token_expiry: 10800,
    };

    assert!(verify_token(&token, &wrong_jwt_config).is_err());
}

#[test]
fn test_verify_token_expired() {
    let jwt_config = get_test_jwt_config();
    let now = chrono::Utc::now().timestamp() as usize;
    let claims = Claims {
        sub: "test@example.com".to_string(),
        role: CustomerRole::Administrator,
        iat: now - 4 * 3600,
        exp: now - 3600,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .unwrap();

    let err = verify_token(&token, &jwt_config).unwrap_err();
    assert_eq!(err.status, axum::http::StatusCode::UNAUTHORIZED);
}

#[test]
fn test_verify_token_unknown_role_rejected() {
    let jwt_config = get_test_jwt_config();
    let now = chrono::Utc::now().timestamp() as usize;
    let token = encode(
        &Header::default(),
        &serde_json::json!({
            "sub": "test@example.com",
            "role": "superuser",
            "iat": now,
            "exp": now + 3600,
        }),
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .unwrap();

    assert!(verify_token(&token, &jwt_config).is_err());
}

#[test]
fn test_verify_token_empty() {
    assert!(verify_token("", &get_test_jwt_config()).is_err());
}

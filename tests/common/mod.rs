#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use customer_api::config::cors::CorsConfig;
use customer_api::config::jwt::JwtConfig;
use customer_api::router::init_router;
use customer_api::state::AppState;
use customer_api::utils::jwt::create_access_token;
use customer_api::utils::password::hash_password;
use customer_api_db::{CustomerRepository, InMemoryCustomerRepository, NewCustomer};
use customer_api_models::{Customer, CustomerRole};
use fake::Fake;
use fake::faker::name::en::Name;
use http_body_util::BodyExt;
use serde_json::Value;
use uuid::Uuid;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes";

pub struct TestApp {
    pub router: Router,
    pub customers: Arc<InMemoryCustomerRepository>,
    pub jwt_config: JwtConfig,
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        access_token_expiry: 10800,
    }
}

pub fn setup_test_app() -> TestApp {
    let customers = Arc::new(InMemoryCustomerRepository::new());
    let jwt_config = test_jwt_config();
    let state = AppState::new(
        customers.clone(),
        jwt_config.clone(),
        CorsConfig::from_origins("http://localhost:3000"),
    );

    TestApp {
        router: init_router(state),
        customers,
        jwt_config,
    }
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

/// Inserts a customer straight into the repository, bypassing the API.
pub async fn create_test_customer(
    customers: &InMemoryCustomerRepository,
    email: &str,
    password: &str,
    role: CustomerRole,
) -> Customer {
    customers
        .create(NewCustomer {
            name: Name().fake(),
            phone: Some("555-0100".to_string()),
            national_id: Some("12345678900".to_string()),
            email: email.to_string(),
            password_hash: hash_password(password).unwrap(),
            role,
        })
        .await
        .unwrap()
}

/// Token for a caller with `role`; the caller need not exist in the store.
pub fn token_for(app: &TestApp, role: CustomerRole) -> String {
    let caller = Customer {
        id: 0,
        name: "Caller".to_string(),
        phone: None,
        national_id: None,
        email: generate_unique_email(),
        password_hash: String::new(),
        role,
    };
    create_access_token(&caller, &app.jwt_config).unwrap()
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

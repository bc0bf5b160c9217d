use serde::{Deserialize, Serialize};

use crate::customers::Customer;

/// Credentials are matched against stored records as given; there are no
/// format rules here.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Reduced profile returned on a successful login, plus the access token.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub national_id: Option<String>,
    pub token: String,
}

impl LoginResponse {
    pub fn new(customer: Customer, token: String) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            email: customer.email,
            national_id: customer.national_id,
            token,
        }
    }
}

//! Customer entity and DTOs.
//!
//! A [`Customer`] is both the row stored in the `customers` table and the
//! JSON representation returned by the API. The bcrypt hash is part of the
//! row but is never serialized.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Authorization role of a customer.
///
/// Persisted in the `customer_role` Postgres enum and embedded in access
/// tokens as the `role` claim.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "customer_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CustomerRole {
    #[default]
    Editor,
    Administrator,
}

impl CustomerRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerRole::Editor => "editor",
            CustomerRole::Administrator => "administrator",
        }
    }
}

impl std::fmt::Display for CustomerRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub phone: Option<String>,
    pub national_id: Option<String>,
    pub email: String,
    #[serde(skip)]
    pub password_hash: String,
    pub role: CustomerRole,
}

/// Request body for `POST /customers` and `PUT /customers/{id}`.
///
/// An update overwrites every field. `role` is optional: creation falls back
/// to [`CustomerRole::Editor`], an update keeps the stored role.
#[derive(Deserialize, Clone, Validate)]
pub struct CustomerPayload {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub phone: Option<String>,
    pub national_id: Option<String>,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
    pub role: Option<CustomerRole>,
}

impl std::fmt::Debug for CustomerPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomerPayload")
            .field("name", &self.name)
            .field("phone", &self.phone)
            .field("national_id", &self.national_id)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

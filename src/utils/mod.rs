//! Shared utilities, re-exported from the workspace crates so handlers can
//! keep short `crate::utils::...` paths:
//!
//! - [`errors`]: [`AppError`](errors::AppError) and its HTTP mapping
//! - [`jwt`]: access token creation and verification
//! - [`password`]: bcrypt hashing and verification

pub use customer_api_auth::jwt;
pub use customer_api_core::{errors, password};

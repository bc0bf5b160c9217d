//! # Customer API Auth
//!
//! Access token issuance and verification.
//!
//! - [`claims`]: the [`Claims`] embedded in every access token
//! - [`jwt`]: [`create_access_token`] and [`verify_token`]
//!
//! Tokens are HS256 JWTs signed with the secret from
//! [`customer_api_config::JwtConfig`]. They carry the customer's email as the
//! subject and the customer's role, and expire after
//! `JwtConfig::access_token_expiry` seconds. Verification is stateless.
//!
//! # Example
//!
//! ```ignore
//! use customer_api_auth::{create_access_token, verify_token};
//!
//! let token = create_access_token(&customer, &jwt_config)?;
//! let claims = verify_token(&token, &jwt_config)?;
//! assert_eq!(claims.sub, customer.email);
//! ```

pub mod claims;
pub mod jwt;

pub use claims::Claims;
pub use jwt::{create_access_token, verify_token};

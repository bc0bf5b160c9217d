//! # Customer API Core
//!
//! Foundational types shared by every crate in the workspace:
//!
//! - [`errors`]: the [`AppError`] type and its HTTP response conversion
//! - [`password`]: bcrypt password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use customer_api_core::{AppError, hash_password, verify_password};
//!
//! let hash = hash_password("s3cret")?;
//! assert!(verify_password("s3cret", &hash)?);
//!
//! let error = AppError::not_found(anyhow::anyhow!("Customer not found"));
//! ```

pub mod errors;
pub mod password;

pub use errors::AppError;
pub use password::{hash_password, verify_password};

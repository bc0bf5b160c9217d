//! Authentication and authorization extractors.
//!
//! # Modules
//!
//! - [`auth`]: the [`AuthUser`](auth::AuthUser) extractor and the role
//!   extractors built with `require_role!`
//! - [`role`]: role checking helpers
//!
//! # Authentication Flow
//!
//! 1. Client sends request with `Authorization: Bearer <token>` header
//! 2. `AuthUser` verifies the signature and expiry (401 on failure)
//! 3. A role extractor compares the `role` claim with the route's allowed
//!    roles (403 on failure)
//! 4. Handler executes if all checks pass
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::RequireAdministrator;
//!
//! async fn delete_customer(
//!     State(state): State<AppState>,
//!     RequireAdministrator(_auth_user): RequireAdministrator,
//!     Path(id): Path<i32>,
//! ) -> Result<StatusCode, AppError> {
//!     // Only executes for administrators
//! }
//! ```

pub mod auth;
pub mod role;

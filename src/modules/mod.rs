//! Feature modules. Each one follows the same layout:
//!
//! - `controller.rs`: HTTP handlers
//! - `service.rs`: business logic on top of the customer repository
//! - `model.rs`: DTOs used by the handlers
//! - `router.rs`: axum router for the module

pub mod auth;
pub mod customers;
pub mod home;

//! # Customer API Models
//!
//! Data structures shared across the workspace: the database entity, the
//! request/response DTOs and the role enum carried in access tokens.
//!
//! - [`customers`]: [`Customer`], [`CustomerRole`], [`CustomerPayload`]
//! - [`auth`]: [`LoginRequest`], [`LoginResponse`]

pub mod auth;
pub mod customers;

pub use auth::{LoginRequest, LoginResponse};
pub use customers::{Customer, CustomerPayload, CustomerRole};

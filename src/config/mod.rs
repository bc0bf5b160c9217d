//! Configuration modules for the Customer API.
//!
//! The token, CORS and listener settings live in the `customer-api-config`
//! crate and are re-exported here; [`database`] resolves the connection
//! settings and opens the pool.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`, `DB_MAX_CONNECTIONS`: see [`database`]
//! - `APP_SETTINGS`, `JWT_SECRET`, `JWT_ACCESS_EXPIRY`: see [`jwt`]
//! - `ALLOWED_ORIGINS`: see [`cors`]
//! - `HOST`, `PORT`: see [`server`]

pub mod database;

pub use customer_api_config::{ConfigError, cors, jwt, server};

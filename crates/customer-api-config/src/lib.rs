//! # Customer API Config
//!
//! Configuration types for the Customer API, loaded once at startup:
//!
//! - [`jwt`]: token signing secret (from the settings file) and expiry
//! - [`cors`]: allowed CORS origins
//! - [`server`]: listener address
//!
//! # Example
//!
//! ```ignore
//! use customer_api_config::{CorsConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::load()?;
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod server;

use std::path::PathBuf;

use thiserror::Error;

pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("signing secret is empty")]
    EmptySecret,
}

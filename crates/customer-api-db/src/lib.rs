//! # Customer API DB
//!
//! Database pool initialization and the customer access layer.
//!
//! Handlers never talk to SQL directly: they go through the
//! [`CustomerRepository`] trait, implemented for PostgreSQL by
//! [`PgCustomerRepository`]. With the `test-utils` feature the crate also
//! provides [`InMemoryCustomerRepository`], which honours the same contract
//! without a database.
//!
//! # Example
//!
//! ```ignore
//! use customer_api_db::{init_db_pool, PgCustomerRepository};
//!
//! let pool = init_db_pool(&database_url, 5).await?;
//! let repository = PgCustomerRepository::new(pool);
//! let customers = repository.list().await?;
//! ```

pub mod customers;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod memory;

use sqlx::postgres::PgPoolOptions;

pub use customers::{CustomerRepository, CustomerUpdate, NewCustomer, PgCustomerRepository};
pub use error::RepositoryError;
#[cfg(any(test, feature = "test-utils"))]
pub use memory::InMemoryCustomerRepository;

/// Initializes a PostgreSQL connection pool.
///
/// The returned pool is cheaply cloneable and is created once at startup.
pub async fn init_db_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

// Re-export PgPool for convenience
pub use sqlx::PgPool;

//! Customer access layer.

use async_trait::async_trait;
use customer_api_models::{Customer, CustomerRole};
use sqlx::PgPool;
use tracing::warn;

use crate::error::RepositoryError;

/// Fields of a customer about to be inserted. The store assigns the id.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: String,
    pub phone: Option<String>,
    pub national_id: Option<String>,
    pub email: String,
    pub password_hash: String,
    pub role: CustomerRole,
}

/// Replacement values for an existing customer. `role: None` keeps the
/// stored role.
#[derive(Debug, Clone)]
pub struct CustomerUpdate {
    pub name: String,
    pub phone: Option<String>,
    pub national_id: Option<String>,
    pub email: String,
    pub password_hash: String,
    pub role: Option<CustomerRole>,
}

/// Reads and writes of [`Customer`] records.
///
/// `update` and `delete` report [`RepositoryError::NotFound`] without
/// writing anything when no record has the given id. A write the store
/// refuses (constraint violation, lost connection mid-write) is reported as
/// [`RepositoryError::Write`].
#[async_trait]
pub trait CustomerRepository: Send + Sync + std::fmt::Debug {
    async fn list(&self) -> Result<Vec<Customer>, RepositoryError>;

    async fn get(&self, id: i32) -> Result<Option<Customer>, RepositoryError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, RepositoryError>;

    async fn create(&self, customer: NewCustomer) -> Result<Customer, RepositoryError>;

    async fn update(&self, id: i32, changes: CustomerUpdate) -> Result<Customer, RepositoryError>;

    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}

const CUSTOMER_COLUMNS: &str = "id, name, phone, national_id, email, password_hash, role";

#[derive(Debug, Clone)]
pub struct PgCustomerRepository {
    db: PgPool,
}

impl PgCustomerRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

fn write_error(operation: &str, err: sqlx::Error) -> RepositoryError {
    warn!(error = %err, operation, "customer write rejected");
    RepositoryError::Write(err.to_string())
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    async fn list(&self) -> Result<Vec<Customer>, RepositoryError> {
        let customers = sqlx::query_as::<_, Customer>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers ORDER BY id"
        ))
        .fetch_all(&self.db)
        .await?;

        Ok(customers)
    }

    async fn get(&self, id: i32) -> Result<Option<Customer>, RepositoryError> {
        let customer = sqlx::query_as::<_, Customer>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(customer)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, RepositoryError> {
        let customer = sqlx::query_as::<_, Customer>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.db)
        .await?;

        Ok(customer)
    }

    async fn create(&self, customer: NewCustomer) -> Result<Customer, RepositoryError> {
        sqlx::query_as::<_, Customer>(&format!(
            r#"
            INSERT INTO customers (name, phone, national_id, email, password_hash, role)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {CUSTOMER_COLUMNS}
            "#
        ))
        .bind(customer.name)
        .bind(customer.phone)
        .bind(customer.national_id)
        .bind(customer.email)
        .bind(customer.password_hash)
        .bind(customer.role)
        .fetch_one(&self.db)
        .await
        .map_err(|e| write_error("create", e))
    }

    async fn update(&self, id: i32, changes: CustomerUpdate) -> Result<Customer, RepositoryError> {
        sqlx::query_as::<_, Customer>(&format!(
            r#"
            UPDATE customers
            SET name = $2,
                phone = $3,
                national_id = $4,
                email = $5,
                password_hash = $6,
                role = COALESCE($7, role)
            WHERE id = $1
            RETURNING {CUSTOMER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(changes.name)
        .bind(changes.phone)
        .bind(changes.national_id)
        .bind(changes.email)
        .bind(changes.password_hash)
        .bind(changes.role)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| write_error("update", e))?
        .ok_or(RepositoryError::NotFound(id))
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| write_error("delete", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(id));
        }

        Ok(())
    }
}

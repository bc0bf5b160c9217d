use anyhow::anyhow;
use tracing::info;

use crate::modules::customers::model::{Customer, CustomerPayload};
use crate::utils::errors::AppError;
use crate::utils::password::hash_password;
use customer_api_db::{CustomerRepository, CustomerUpdate, NewCustomer, RepositoryError};

pub struct CustomerService;

/// Translates access-layer failures: a missing record is 404, a refused
/// write is 400 with `write_failure` as the message, anything else is 500.
fn map_repository_error(err: RepositoryError, write_failure: &'static str) -> AppError {
    match err {
        RepositoryError::NotFound(_) => AppError::not_found(anyhow!("Customer not found")),
        RepositoryError::Write(_) => AppError::bad_request(anyhow!(write_failure)),
        RepositoryError::Database(e) => AppError::database(e),
    }
}

impl CustomerService {
    pub async fn list_customers(
        customers: &dyn CustomerRepository,
    ) -> Result<Vec<Customer>, AppError> {
        customers.list().await.map_err(AppError::database)
    }

    pub async fn get_customer(
        customers: &dyn CustomerRepository,
        id: i32,
    ) -> Result<Customer, AppError> {
        customers
            .get(id)
            .await
            .map_err(AppError::database)?
            .ok_or_else(|| AppError::not_found(anyhow!("Customer not found")))
    }

    pub async fn create_customer(
        customers: &dyn CustomerRepository,
        dto: CustomerPayload,
    ) -> Result<Customer, AppError> {
        let password_hash = hash_password(&dto.password)?;

        let customer = customers
            .create(NewCustomer {
                name: dto.name,
                phone: dto.phone,
                national_id: dto.national_id,
                email: dto.email,
                password_hash,
                role: dto.role.unwrap_or_default(),
            })
            .await
            .map_err(|e| map_repository_error(e, "Failed to save customer"))?;

        info!(customer_id = customer.id, role = %customer.role, "Customer created");
        Ok(customer)
    }

    pub async fn update_customer(
        customers: &dyn CustomerRepository,
        id: i32,
        dto: CustomerPayload,
    ) -> Result<Customer, AppError> {
        let password_hash = hash_password(&dto.password)?;

        let customer = customers
            .update(
                id,
                CustomerUpdate {
                    name: dto.name,
                    phone: dto.phone,
                    national_id: dto.national_id,
                    email: dto.email,
                    password_hash,
                    role: dto.role,
                },
            )
            .await
            .map_err(|e| map_repository_error(e, "Failed to save customer"))?;

        info!(customer_id = customer.id, "Customer updated");
        Ok(customer)
    }

    pub async fn delete_customer(
        customers: &dyn CustomerRepository,
        id: i32,
    ) -> Result<(), AppError> {
        customers
            .delete(id)
            .await
            .map_err(|e| map_repository_error(e, "Failed to delete customer"))?;

        info!(customer_id = id, "Customer deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_map_repository_error() {
        assert_eq!(
            map_repository_error(RepositoryError::NotFound(3), "x").status,
            StatusCode::NOT_FOUND
        );

        let write = map_repository_error(RepositoryError::Write("dup".into()), "Failed to save customer");
        assert_eq!(write.status, StatusCode::BAD_REQUEST);
        assert_eq!(write.error.to_string(), "Failed to save customer");

        assert_eq!(
            map_repository_error(RepositoryError::Database(sqlx::Error::PoolTimedOut), "x").status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

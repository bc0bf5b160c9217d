//! Administrative commands run outside the HTTP server.

use anyhow::anyhow;
use validator::Validate;

use crate::modules::customers::model::{Customer, CustomerPayload, CustomerRole};
use crate::modules::customers::service::CustomerService;
use crate::utils::errors::AppError;
use customer_api_db::CustomerRepository;

pub struct NewAdministrator {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub national_id: Option<String>,
}

/// Creates a customer with the administrator role.
///
/// The HTTP API can only create administrators when called by one, so the
/// first account has to come from here.
pub async fn create_administrator(
    customers: &dyn CustomerRepository,
    admin: NewAdministrator,
) -> Result<Customer, AppError> {
    let payload = CustomerPayload {
        name: admin.name,
        phone: admin.phone,
        national_id: admin.national_id,
        email: admin.email,
        password: admin.password,
        role: Some(CustomerRole::Administrator),
    };

    payload
        .validate()
        .map_err(|e| AppError::unprocessable(anyhow!("{}", e)))?;

    CustomerService::create_customer(customers, payload).await
}

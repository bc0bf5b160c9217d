use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::instrument;

use crate::middleware::auth::{RequireAdministrator, RequireEditor};
use crate::modules::customers::model::{Customer, CustomerPayload};
use crate::modules::customers::service::CustomerService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// List every customer (editor or administrator)
#[instrument(skip_all)]
pub async fn list_customers(
    State(state): State<AppState>,
    _auth: RequireEditor,
) -> Result<Json<Vec<Customer>>, AppError> {
    let customers = CustomerService::list_customers(state.customers.as_ref()).await?;
    Ok(Json(customers))
}

/// Create a customer (administrator). Answers 201 with a `Location` header.
#[instrument(skip_all, fields(email = %dto.email))]
pub async fn create_customer(
    State(state): State<AppState>,
    _auth: RequireAdministrator,
    ValidatedJson(dto): ValidatedJson<CustomerPayload>,
) -> Result<impl IntoResponse, AppError> {
    let customer = CustomerService::create_customer(state.customers.as_ref(), dto).await?;
    let location = format!("/customers/{}", customer.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(customer),
    ))
}

/// Get one customer by id (editor or administrator)
#[instrument(skip_all, fields(customer_id = id))]
pub async fn get_customer(
    State(state): State<AppState>,
    _auth: RequireEditor,
    Path(id): Path<i32>,
) -> Result<Json<Customer>, AppError> {
    let customer = CustomerService::get_customer(state.customers.as_ref(), id).await?;
    Ok(Json(customer))
}

/// Overwrite every field of a customer (administrator)
#[instrument(skip_all, fields(customer_id = id))]
pub async fn update_customer(
    State(state): State<AppState>,
    _auth: RequireAdministrator,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<CustomerPayload>,
) -> Result<Json<Customer>, AppError> {
    let customer = CustomerService::update_customer(state.customers.as_ref(), id, dto).await?;
    Ok(Json(customer))
}

/// Delete a customer (administrator)
#[instrument(skip_all, fields(customer_id = id))]
pub async fn delete_customer(
    State(state): State<AppState>,
    _auth: RequireAdministrator,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    CustomerService::delete_customer(state.customers.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

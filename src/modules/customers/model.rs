pub use customer_api_models::customers::{Customer, CustomerPayload, CustomerRole};

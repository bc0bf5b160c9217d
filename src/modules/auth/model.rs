pub use customer_api_auth::Claims;
pub use customer_api_models::auth::{LoginRequest, LoginResponse};

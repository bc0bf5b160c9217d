use anyhow::anyhow;
use tracing::{info, warn};

use crate::config::jwt::JwtConfig;
use crate::modules::auth::model::{LoginRequest, LoginResponse};
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::utils::password::verify_password;
use customer_api_db::CustomerRepository;

pub struct AuthService;

impl AuthService {
    pub async fn login(
        customers: &dyn CustomerRepository,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let no_match = || AppError::not_found(anyhow!("No customer matches these credentials"));

        let customer = customers
            .find_by_email(&dto.email)
            .await
            .map_err(AppError::database)?
            .ok_or_else(|| {
                warn!("Login attempt for unknown email");
                no_match()
            })?;

        if !verify_password(&dto.password, &customer.password_hash)? {
            warn!(customer_id = customer.id, "Login attempt with wrong password");
            return Err(no_match());
        }

        let token = create_access_token(&customer, jwt_config)?;
        info!(customer_id = customer.id, role = %customer.role, "Access token issued");

        Ok(LoginResponse::new(customer, token))
    }
}

use std::sync::Arc;

use anyhow::Context;

use crate::config::cors::CorsConfig;
use crate::config::database::{DatabaseConfig, init_db_pool};
use crate::config::jwt::JwtConfig;
use customer_api_db::{CustomerRepository, PgCustomerRepository};

#[derive(Clone, Debug)]
pub struct AppState {
    pub customers: Arc<dyn CustomerRepository>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(
        customers: Arc<dyn CustomerRepository>,
        jwt_config: JwtConfig,
        cors_config: CorsConfig,
    ) -> Self {
        Self {
            customers,
            jwt_config,
            cors_config,
        }
    }
}

/// Builds the process-wide state: the connection pool, the signing secret
/// and CORS settings are all loaded here, once.
pub async fn init_app_state() -> anyhow::Result<AppState> {
    let database_config = DatabaseConfig::from_env()?;
    let pool = init_db_pool(&database_config).await?;
    let jwt_config = JwtConfig::load().context("Failed to load token signing configuration")?;

    Ok(AppState::new(
        Arc::new(PgCustomerRepository::new(pool)),
        jwt_config,
        CorsConfig::from_env(),
    ))
}

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::JsonBody;
use axum::Json;
use axum::extract::State;
use tracing::instrument;

use super::model::{LoginRequest, LoginResponse};
use super::service::AuthService;

/// Exchange email and password for an access token.
///
/// Any credentials that match no stored customer answer 404, including
/// emails that are not well formed and empty passwords.
#[instrument(skip_all, fields(email = %dto.email))]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = AuthService::login(state.customers.as_ref(), dto, &state.jwt_config).await?;
    Ok(Json(response))
}

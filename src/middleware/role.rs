//! Role checks shared by the role extractors and by handlers that need a
//! manual check.

use crate::middleware::auth::AuthUser;
use crate::utils::errors::AppError;
use customer_api_models::CustomerRole;

/// Fails with 403 unless the caller has exactly `required_role`.
pub fn check_role(auth_user: &AuthUser, required_role: CustomerRole) -> Result<(), AppError> {
    check_any_role(auth_user, &[required_role])
}

/// Fails with 403 unless the caller's role is one of `allowed_roles`.
pub fn check_any_role(auth_user: &AuthUser, allowed_roles: &[CustomerRole]) -> Result<(), AppError> {
    let user_role = auth_user.role();

    if !allowed_roles.contains(&user_role) {
        let allowed = allowed_roles
            .iter()
            .map(CustomerRole::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        return Err(AppError::forbidden(format!(
            "Access denied. Required roles: [{}], but user has role: {}",
            allowed, user_role
        )));
    }

    Ok(())
}

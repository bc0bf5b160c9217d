use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::modules::auth::model::Claims;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;
use customer_api_models::CustomerRole;

/// Extractor that validates the bearer token and exposes its claims.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// The customer email carried as the token subject
    pub fn email(&self) -> &str {
        &self.0.sub
    }

    pub fn role(&self) -> CustomerRole {
        self.0.role
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid authorization header format"))?;

        let claims = verify_token(token.trim(), &state.jwt_config)?;
        tracing::Span::current().record("customer", claims.sub.as_str());

        Ok(AuthUser(claims))
    }
}

/// Declares an extractor that authenticates the caller and then requires the
/// token's role to be one of the listed roles (403 otherwise).
#[macro_export]
macro_rules! require_role {
    ($name:ident, [$($role:expr),+ $(,)?]) => {
        #[derive(Debug, Clone)]
        pub struct $name(pub $crate::middleware::auth::AuthUser);

        impl axum::extract::FromRequestParts<$crate::state::AppState> for $name {
            type Rejection = $crate::utils::errors::AppError;

            async fn from_request_parts(
                parts: &mut axum::http::request::Parts,
                state: &$crate::state::AppState,
            ) -> Result<Self, Self::Rejection> {
                let auth_user = <$crate::middleware::auth::AuthUser as axum::extract::FromRequestParts<
                    $crate::state::AppState,
                >>::from_request_parts(parts, state)
                .await?;

                $crate::middleware::role::check_any_role(&auth_user, &[$($role),+])?;

                Ok($name(auth_user))
            }
        }
    };
}

// Read routes
require_role!(
    RequireEditor,
    [CustomerRole::Editor, CustomerRole::Administrator]
);

// Write and delete routes
require_role!(RequireAdministrator, [CustomerRole::Administrator]);

#[cfg(test)]
mod tests {
    use super::*;

    fn auth_user(role: CustomerRole) -> AuthUser {
        AuthUser(Claims {
            sub: "test@example.com".to_string(),
            role,
            exp: 9999999999,
            iat: 1234567890,
        })
    }

    #[test]
    fn test_accessors() {
        let user = auth_user(CustomerRole::Editor);

        assert_eq!(user.email(), "test@example.com");
        assert_eq!(user.role(), CustomerRole::Editor);
    }
}

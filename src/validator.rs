use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::utils::errors::AppError;

fn format_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    messages.sort();
    messages.join(", ")
}

/// Deserializes the request body, mapping serde failures to 400 responses
/// whose message names the offending field where possible.
async fn parse_json<T, S>(req: Request, state: &S) -> Result<T, AppError>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    let Json(value) = Json::<T>::from_request(req, state)
        .await
        .map_err(|rejection| {
            if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
                return AppError::bad_request(anyhow!(
                    "Missing 'Content-Type: application/json' header"
                ));
            }

            let error_msg = rejection.body_text();

            if let Some(field) = error_msg
                .split("missing field `")
                .nth(1)
                .and_then(|s| s.split('`').next())
            {
                return AppError::bad_request(anyhow!("{} is required", field));
            }

            if error_msg.contains("invalid type") || error_msg.contains("unknown variant") {
                return AppError::bad_request(anyhow!("Invalid field type in request"));
            }

            AppError::bad_request(anyhow!("Invalid request body"))
        })?;

    Ok(value)
}

/// JSON body extractor without field rules. Malformed bodies are rejected
/// with 400, same as [`ValidatedJson`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        parse_json(req, state).await.map(JsonBody)
    }
}

/// JSON body extractor that runs `validator` rules after deserializing.
///
/// Malformed bodies are rejected with 400, rule violations with 422.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value: T = parse_json(req, state).await?;

        value.validate().map_err(|errors| {
            AppError::unprocessable(anyhow!("{}", format_errors(&errors)))
        })?;

        Ok(ValidatedJson(value))
    }
}

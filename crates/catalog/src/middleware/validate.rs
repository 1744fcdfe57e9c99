use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use shared::errors::HttpError;
use validator::{Validate, ValidationErrors};

/// JSON extractor that turns missing/malformed fields and failed validation
/// rules into a 400 response instead of the default axum rejection.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| HttpError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| HttpError::BadRequest(format_validation_errors(&errors)))?;

        Ok(Self(value))
    }
}

fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid {field}"));
            messages.push(format!("{field}: {message}"));
        }
    }

    if messages.is_empty() {
        "Validation failed".to_string()
    } else {
        messages.join("; ")
    }
}

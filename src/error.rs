use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use folio_contact::{FAILURE_MESSAGE, INVALID_FORM_MESSAGE};
use folio_shared::Error;
use serde::Serialize;

use crate::template::SERVER_ERROR_MESSAGE;

/// JSON error envelope for the API routes.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl<E> From<E> for ApiError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    errors: BTreeMap<String, String>,
}

impl ErrorBody {
    fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: BTreeMap::new(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self.0 {
            Error::Validate(errors) => {
                let mut body = ErrorBody::new(INVALID_FORM_MESSAGE);
                for (field, field_errors) in errors.field_errors() {
                    let message = field_errors
                        .iter()
                        .find_map(|e| e.message.as_ref())
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{field} is invalid"));

                    body.errors.insert(field.to_string(), message);
                }

                (StatusCode::UNPROCESSABLE_ENTITY, body)
            }
            Error::Transport(err) => {
                tracing::error!(error = %err, "contact transport failed");

                (StatusCode::BAD_GATEWAY, ErrorBody::new(FAILURE_MESSAGE))
            }
            Error::Store(err) => {
                tracing::error!(error = %err, "key-value store failed");

                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorBody::new(SERVER_ERROR_MESSAGE),
                )
            }
            Error::Server(err) => {
                tracing::error!("{err}");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new(SERVER_ERROR_MESSAGE),
                )
            }
            Error::Unknown(err) => {
                tracing::error!("{err}");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new(SERVER_ERROR_MESSAGE),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

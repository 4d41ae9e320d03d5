use axum::{
    Json,
    extract::{Form, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use folio_contact::{ContactFormInput, Field};
use serde::Deserialize;

use crate::{
    middleware::Visitor,
    routes::AppState,
    template::{Template, ToastErrorTemplate, ToastSuccessTemplate},
};

pub async fn action(
    template: Template,
    visitor: Visitor,
    State(app): State<AppState>,
    Form(input): Form<ContactFormInput>,
) -> impl IntoResponse {
    let result = app.contact.submit_form(&input).await;

    if result.success {
        folio_contact::clear_draft(&visitor.store(&app.store)).await;

        return template
            .render(ToastSuccessTemplate {
                message: &result.message,
                description: None,
            })
            .into_response();
    }

    let status = if result.errors.is_empty() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };

    let errors = result
        .errors
        .iter()
        .map(|(field, message)| (field.label(), message.as_str()))
        .collect();

    (
        status,
        template.render(ToastErrorTemplate {
            message: &result.message,
            errors,
        }),
    )
        .into_response()
}

#[derive(Deserialize)]
pub struct ValidateQuery {
    pub field: Option<Field>,
}

/// Whole form validation, or a single field when `?field=` is given.
pub async fn validate(
    State(app): State<AppState>,
    Query(query): Query<ValidateQuery>,
    Form(input): Form<ContactFormInput>,
) -> Response {
    match query.field {
        Some(field) => {
            Json(app.contact.limits().validate_field(field, input.get(field))).into_response()
        }
        None => Json(app.contact.validate(&input)).into_response(),
    }
}

use std::collections::BTreeMap;

use axum::{Json, extract::State};
use folio_contact::{ContactFormInput, SUCCESS_MESSAGE, SubmissionResult, SubmissionState};

use crate::{error::ApiError, middleware::Visitor, routes::AppState};

/// POST /api/contact - JSON variant of the contact form
pub async fn submit(
    visitor: Visitor,
    State(app): State<AppState>,
    Json(input): Json<ContactFormInput>,
) -> Result<Json<SubmissionResult>, ApiError> {
    let data = app.contact.send(&input).await?;
    folio_contact::clear_draft(&visitor.store(&app.store)).await;

    Ok(Json(SubmissionResult {
        success: true,
        message: SUCCESS_MESSAGE.to_owned(),
        errors: BTreeMap::new(),
        data: Some(data),
        state: SubmissionState::Succeeded,
    }))
}

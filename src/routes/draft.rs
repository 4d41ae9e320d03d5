use axum::{
    Json,
    extract::{Form, State},
    http::StatusCode,
};
use folio_contact::{ContactFormInput, Draft};

use crate::{middleware::Visitor, routes::AppState};

pub async fn load(visitor: Visitor, State(app): State<AppState>) -> Json<Option<Draft>> {
    Json(folio_contact::load_draft(&visitor.store(&app.store)).await)
}

pub async fn save(
    visitor: Visitor,
    State(app): State<AppState>,
    Form(input): Form<ContactFormInput>,
) -> StatusCode {
    folio_contact::save_draft(&visitor.store(&app.store), &input).await;

    StatusCode::NO_CONTENT
}

pub async fn clear(visitor: Visitor, State(app): State<AppState>) -> StatusCode {
    folio_contact::clear_draft(&visitor.store(&app.store)).await;

    StatusCode::NO_CONTENT
}

use axum::{
    Router, middleware as axum_middleware,
    response::IntoResponse,
    routing::{get, post},
};
use folio_contact::Command;
use folio_shared::SharedStore;
use sqlx::SqlitePool;

use crate::template::{NotFoundTemplate, Template};

mod api;
mod assets;
mod contact;
mod draft;
mod health;
mod index;
mod portfolio;
mod theme;

pub use assets::AssetsService;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub store: SharedStore,
    pub contact: Command,
    pub pool: SqlitePool,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    (
        axum::http::StatusCode::NOT_FOUND,
        template.render(NotFoundTemplate),
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .merge(
            Router::new()
                .route("/", get(index::page))
                .route("/portfolio", get(portfolio::grid))
                .route("/portfolio/{id}", get(portfolio::detail))
                .route("/contact", post(contact::action))
                .route("/contact/validate", post(contact::validate))
                .route(
                    "/contact/draft",
                    get(draft::load).post(draft::save).delete(draft::clear),
                )
                .route("/theme/toggle", post(theme::toggle))
                .route("/api/contact", post(api::submit))
                .fallback(fallback)
                .layer(axum_middleware::from_fn(
                    crate::middleware::visitor_middleware,
                ))
                .with_state(app_state),
        )
        .nest_service("/static", AssetsService::new())
}

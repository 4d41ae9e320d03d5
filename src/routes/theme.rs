use axum::{
    Json,
    extract::State,
    http::{HeaderMap, header},
    response::{IntoResponse, Redirect, Response},
};
use folio_shared::theme::{self, Theme};
use serde::Serialize;

use crate::{middleware::Visitor, routes::AppState, template::prefers_dark};

#[derive(Serialize)]
pub struct ThemeBody {
    pub theme: Theme,
}

/// Flips the visitor theme. Plain form posts are sent back to the page,
/// script calls get the new theme as JSON.
pub async fn toggle(visitor: Visitor, headers: HeaderMap, State(app): State<AppState>) -> Response {
    let store = visitor.store(&app.store);
    let current = theme::saved_theme(&store)
        .await
        .unwrap_or_else(|| Theme::from_preference(prefers_dark(&headers)));

    let theme = theme::toggle(&store, current).await;

    let wants_html = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("text/html"));

    if wants_html {
        return Redirect::to("/").into_response();
    }

    Json(ThemeBody { theme }).into_response()
}

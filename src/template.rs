use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use folio_shared::theme::{self, Theme};

use crate::{config::SiteConfig, middleware::Visitor, routes::AppState};

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";

/// Client hint sent by browsers that were asked for the color scheme.
pub const PREFERS_COLOR_SCHEME: &str = "sec-ch-prefers-color-scheme";

pub struct Template {
    pub theme: Theme,
    pub site: SiteConfig,
}

impl Template {
    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match template.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "failed to render template");

                let page = askama::Template::render(&ServerTemplate)
                    .unwrap_or_else(|_| SERVER_ERROR_MESSAGE.to_owned());

                (StatusCode::INTERNAL_SERVER_ERROR, Html(page)).into_response()
            }
        }
    }
}

pub fn prefers_dark(headers: &HeaderMap) -> bool {
    headers
        .get(PREFERS_COLOR_SCHEME)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim_matches('"').eq_ignore_ascii_case("dark"))
}

impl FromRequestParts<AppState> for Template {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let visitor = Visitor::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        let store = visitor.store(&state.store);
        let prefers_dark = prefers_dark(&parts.headers);

        // cookieless requests never come back under the same id
        let theme = if visitor.is_returning() {
            theme::init(&store, prefers_dark).await
        } else {
            theme::resolve(&store, prefers_dark).await
        };

        Ok(Template {
            theme,
            site: state.config.site.clone(),
        })
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;

#[derive(askama::Template)]
#[template(path = "500.html")]
pub struct ServerTemplate;

#[derive(askama::Template)]
#[template(path = "partials/toast-success.html")]
pub struct ToastSuccessTemplate<'a> {
    pub message: &'a str,
    pub description: Option<&'a str>,
}

#[derive(askama::Template)]
#[template(path = "partials/toast-error.html")]
pub struct ToastErrorTemplate<'a> {
    pub message: &'a str,
    pub errors: Vec<(&'static str, &'a str)>,
}

/// Unwraps an `Option`, answering with the 404 page when it is empty.
#[macro_export]
macro_rules! try_page_response {
    (opt: $result:expr, $template:expr) => {
        match $result {
            Some(r) => r,
            None => {
                return (
                    axum::http::StatusCode::NOT_FOUND,
                    $template.render($crate::template::NotFoundTemplate),
                )
                    .into_response();
            }
        }
    };
}

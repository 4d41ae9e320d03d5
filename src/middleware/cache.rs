use axum::{
    body::Body,
    http::{HeaderValue, Request, Response, header},
    middleware::Next,
};

/// Embedded assets are cached for a year, everything else is never cached
/// since pages carry per visitor state.
pub async fn cache_control_middleware(req: Request<Body>, next: Next) -> Response<Body> {
    let is_static_file = req.uri().path().starts_with("/static/");
    let mut response = next.run(req).await;

    let headers = response.headers_mut();

    if is_static_file {
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=31536000, immutable"),
        );
    } else {
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store, no-cache, must-revalidate, proxy-revalidate"),
        );
        headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
        headers.insert(header::EXPIRES, HeaderValue::from_static("0"));
    }

    response
}

use std::{
    convert::Infallible,
    future::{Ready, ready},
    task::{Context, Poll},
};

use axum::{
    extract::Request,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;
use tower::Service;

#[derive(RustEmbed)]
#[folder = "static/"]
#[prefix = "/"]
struct Assets;

/// Serves files embedded from `static/` at build time.
#[derive(Default, Clone)]
pub struct AssetsService;

impl AssetsService {
    pub fn new() -> Self {
        Self
    }
}

impl Service<Request> for AssetsService {
    type Response = Response;
    type Error = Infallible;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let path = req.uri().path();

        let resp = match Assets::get(path) {
            Some(content) => {
                let mime = mime_guess::from_path(path).first_or_octet_stream();

                (
                    [(header::CONTENT_TYPE, mime.as_ref().to_owned())],
                    content.data.into_owned(),
                )
                    .into_response()
            }
            _ => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
        };

        ready(Ok(resp))
    }
}

use axum::{
    extract::{FromRequestParts, Request},
    http::{StatusCode, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use folio_shared::{Scoped, SharedStore};
use ulid::Ulid;

pub const VISITOR_COOKIE_NAME: &str = "folio_visitor";

/// Anonymous browser identity. Every record a visitor owns in the key-value
/// store lives under its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visitor {
    id: String,
    returning: bool,
}

impl Visitor {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether the request carried a valid visitor cookie.
    pub fn is_returning(&self) -> bool {
        self.returning
    }

    pub fn store(&self, store: &SharedStore) -> Scoped {
        Scoped::new(store.clone(), self.id.to_owned())
    }
}

fn build_cookie<'a>(id: String) -> Cookie<'a> {
    Cookie::build((VISITOR_COOKIE_NAME, id))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::days(365))
        .build()
}

/// Resolves the visitor from its cookie, issuing a new id when the cookie
/// is missing or malformed.
pub async fn visitor_middleware(jar: CookieJar, mut req: Request, next: Next) -> Response {
    let known = jar
        .get(VISITOR_COOKIE_NAME)
        .map(|cookie| cookie.value())
        .filter(|value| Ulid::from_string(value).is_ok())
        .map(str::to_owned);

    let visitor = match known {
        Some(id) => Visitor { id, returning: true },
        None => Visitor {
            id: Ulid::new().to_string(),
            returning: false,
        },
    };

    if !visitor.returning {
        tracing::debug!(visitor = visitor.id(), "new visitor");
    }

    req.extensions_mut().insert(visitor.clone());
    let response = next.run(req).await;

    if visitor.returning {
        return response;
    }

    (jar.add(build_cookie(visitor.id)), response).into_response()
}

impl<S: Send + Sync> FromRequestParts<S> for Visitor {
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<Visitor>().cloned().ok_or_else(|| {
            tracing::error!("visitor middleware is not installed");

            (StatusCode::INTERNAL_SERVER_ERROR, "missing visitor")
        })
    }
}

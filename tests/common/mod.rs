#![allow(dead_code)]

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use axum::{Router, body::Body, http::Request, response::Response};
use folio::{
    AppState,
    config::{Config, ContactConfig, DatabaseConfig, ObservabilityConfig, ServerConfig, SiteConfig},
};
use folio_contact::{Ack, Command, Limits, SanitizedSubmission, SimulatedTransport, Transport};
use folio_shared::{MemoryStore, TransportError};
use http_body_util::BodyExt;
use sqlx::sqlite::SqlitePoolOptions;

pub const VISITOR: &str = "01J9Z3QX5Y7K8M2N4P6R8T0V1W";
pub const OTHER_VISITOR: &str = "01J9Z3R0000000000000000000";

pub struct TestApp {
    pub router: Router,
    pub store: MemoryStore,
}

pub fn config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        },
        contact: ContactConfig {
            submit_latency_ms: 0,
            limits: Limits::default(),
        },
        site: SiteConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub async fn create_test_app() -> TestApp {
    create_test_app_with(SimulatedTransport::new(Duration::ZERO)).await
}

pub async fn create_test_app_with(transport: impl Transport + 'static) -> TestApp {
    let pool = SqlitePoolOptions::new()
        .connect("sqlite::memory:")
        .await
        .unwrap();
    let store = MemoryStore::new();
    let config = config();

    let state = AppState {
        store: Arc::new(store.clone()),
        contact: Command::new(transport, config.contact.limits),
        pool,
        config,
    };

    TestApp {
        router: folio::routes::router(state),
        store,
    }
}

pub fn key(visitor: &str, key: &str) -> String {
    format!("{visitor}:{key}")
}

pub fn cookie(visitor: &str) -> String {
    format!("{}={visitor}", folio::middleware::VISITOR_COOKIE_NAME)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("cookie", cookie(VISITOR))
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, form: &[(&str, &str)]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("cookie", cookie(VISITOR))
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(serde_urlencoded::to_string(form).unwrap()))
        .unwrap()
}

pub fn post_json(uri: &str, json: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("cookie", cookie(VISITOR))
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap()
}

pub async fn body_string(response: Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

pub fn valid_form() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "Ada Lovelace"),
        ("email", "ada@example.com"),
        ("subject", "Analytical engine"),
        ("message", "I would like to talk about <notes> & 'programs'."),
    ]
}

/// Transport that always fails with the given error.
pub struct FailingTransport(pub TransportError);

#[async_trait]
impl Transport for FailingTransport {
    async fn submit(&self, _payload: &SanitizedSubmission) -> Result<Ack, TransportError> {
        Err(self.0.clone())
    }
}

/// Transport that records every payload it accepts.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    pub sent: Arc<Mutex<Vec<SanitizedSubmission>>>,
}

impl RecordingTransport {
    pub fn sent(&self) -> Vec<SanitizedSubmission> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn submit(&self, payload: &SanitizedSubmission) -> Result<Ack, TransportError> {
        self.sent.lock().unwrap().push(payload.clone());

        Ok(Ack {
            accepted_at: payload.timestamp.to_owned(),
        })
    }
}

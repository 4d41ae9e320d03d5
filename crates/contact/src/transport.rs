use std::time::Duration;

use async_trait::async_trait;
use folio_shared::TransportError;
use serde::Serialize;
use time::OffsetDateTime;

use crate::{SanitizedSubmission, iso_timestamp};

/// Latency of [`SimulatedTransport`] when nothing else is configured.
pub const DEFAULT_SUBMIT_LATENCY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ack {
    pub accepted_at: String,
}

/// Delivers a sanitized submission somewhere.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn submit(&self, payload: &SanitizedSubmission) -> Result<Ack, TransportError>;
}

/// Accepts every submission after a fixed delay. No I/O happens.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    latency: Duration,
}

impl SimulatedTransport {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_LATENCY)
    }
}

#[async_trait]
impl Transport for SimulatedTransport {
    async fn submit(&self, payload: &SanitizedSubmission) -> Result<Ack, TransportError> {
        tracing::debug!(
            latency_ms = self.latency.as_millis() as u64,
            timestamp = %payload.timestamp,
            "simulating contact submission"
        );

        tokio::time::sleep(self.latency).await;

        Ok(Ack {
            accepted_at: iso_timestamp(OffsetDateTime::now_utc()),
        })
    }
}

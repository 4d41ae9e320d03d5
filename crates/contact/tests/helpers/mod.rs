use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use folio_contact::{Ack, ContactFormInput, SanitizedSubmission, Transport};
use folio_shared::TransportError;

#[allow(dead_code)]
pub fn valid_input() -> ContactFormInput {
    ContactFormInput {
        name: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        subject: "Analytical engine".to_owned(),
        message: "I would like to talk about <notes> & 'programs'.".to_owned(),
    }
}

#[allow(dead_code)]
pub fn invalid_input() -> ContactFormInput {
    ContactFormInput {
        name: "A".to_owned(),
        email: "not-an-email".to_owned(),
        subject: "   ".to_owned(),
        message: "short".to_owned(),
    }
}

/// Transport that always fails with the given error.
#[allow(dead_code)]
pub struct FailingTransport(pub TransportError);

#[async_trait]
impl Transport for FailingTransport {
    async fn submit(&self, _payload: &SanitizedSubmission) -> Result<Ack, TransportError> {
        Err(self.0.clone())
    }
}

/// Transport that records every payload and accepts it after a delay.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct RecordingTransport {
    pub delay: Duration,
    pub sent: Arc<Mutex<Vec<SanitizedSubmission>>>,
}

#[allow(dead_code)]
impl RecordingTransport {
    pub fn sent(&self) -> Vec<SanitizedSubmission> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn submit(&self, payload: &SanitizedSubmission) -> Result<Ack, TransportError> {
        tokio::time::sleep(self.delay).await;
        self.sent.lock().unwrap().push(payload.clone());

        Ok(Ack {
            accepted_at: payload.timestamp.to_owned(),
        })
    }
}

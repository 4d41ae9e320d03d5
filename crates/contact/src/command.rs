use std::{collections::BTreeMap, sync::Arc};

use folio_shared::TransportError;
use time::OffsetDateTime;

use crate::{
    ContactFormInput, Limits, SanitizedSubmission, SubmissionResult, SubmissionState, Transport,
    ValidationResult, validate_contact_form,
};

pub const INVALID_FORM_MESSAGE: &str = "Please fix the errors in the form";
pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I will get back to you soon.";
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Clone)]
pub struct Command {
    transport: Arc<dyn Transport>,
    limits: Limits,
}

impl Command {
    pub fn new(transport: impl Transport + 'static, limits: Limits) -> Self {
        Self {
            transport: Arc::new(transport),
            limits,
        }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn validate(&self, input: &ContactFormInput) -> ValidationResult {
        validate_contact_form(input, &self.limits)
    }

    /// Validates, sanitizes and hands the form to the transport, folding
    /// every outcome into a [`SubmissionResult`].
    ///
    /// An invalid form returns at once without reaching the transport.
    pub async fn submit_form(&self, input: &ContactFormInput) -> SubmissionResult {
        let (state, outcome) = self.run(input).await;

        match outcome {
            Outcome::Invalid(validation) => SubmissionResult {
                success: false,
                message: INVALID_FORM_MESSAGE.to_owned(),
                errors: validation.errors,
                data: None,
                state,
            },
            Outcome::Sent(payload) => SubmissionResult {
                success: true,
                message: SUCCESS_MESSAGE.to_owned(),
                errors: BTreeMap::new(),
                data: Some(payload),
                state,
            },
            Outcome::Failed(_) => SubmissionResult {
                success: false,
                message: FAILURE_MESSAGE.to_owned(),
                errors: BTreeMap::new(),
                data: None,
                state,
            },
        }
    }

    /// Same flow as [`Command::submit_form`] with failures as errors.
    pub async fn send(&self, input: &ContactFormInput) -> folio_shared::Result<SanitizedSubmission> {
        match self.run(input).await.1 {
            Outcome::Invalid(validation) => {
                Err(validation.into_result().err().unwrap_or_default().into())
            }
            Outcome::Sent(payload) => Ok(payload),
            Outcome::Failed(err) => Err(err.into()),
        }
    }

    async fn run(&self, input: &ContactFormInput) -> (SubmissionState, Outcome) {
        let mut flow = Flow::default();

        flow.advance(SubmissionState::Validating);
        let validation = self.validate(input);
        if !validation.is_valid {
            flow.advance(SubmissionState::Invalid);

            return (flow.state, Outcome::Invalid(validation));
        }

        flow.advance(SubmissionState::Sanitizing);
        let payload = SanitizedSubmission::new(input, OffsetDateTime::now_utc());

        flow.advance(SubmissionState::Submitting);
        match self.transport.submit(&payload).await {
            Ok(ack) => {
                flow.advance(SubmissionState::Succeeded);
                tracing::info!(accepted_at = %ack.accepted_at, "contact form submitted");

                (flow.state, Outcome::Sent(payload))
            }
            Err(err) => {
                flow.advance(SubmissionState::Failed);
                tracing::error!(error = %err, "contact form submission failed");

                (flow.state, Outcome::Failed(err))
            }
        }
    }
}

enum Outcome {
    Invalid(ValidationResult),
    Sent(SanitizedSubmission),
    Failed(TransportError),
}

#[derive(Default)]
struct Flow {
    state: SubmissionState,
}

impl Flow {
    fn advance(&mut self, next: SubmissionState) {
        debug_assert!(
            self.state.can_advance_to(next),
            "invalid submission transition {} -> {next}",
            self.state
        );

        tracing::trace!(from = %self.state, to = %next, "submission state");
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::SimulatedTransport;

    struct Refusing;

    #[async_trait::async_trait]
    impl Transport for Refusing {
        async fn submit(&self, _payload: &SanitizedSubmission) -> Result<crate::Ack, TransportError> {
            Err(TransportError::Status(500))
        }
    }

    fn input(name: &str) -> ContactFormInput {
        ContactFormInput {
            name: name.to_owned(),
            email: "ada@example.com".to_owned(),
            subject: "Engines".to_owned(),
            message: "Let us compute everything.".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_send_walks_the_same_states() {
        let command = Command::new(SimulatedTransport::new(Duration::ZERO), Limits::default());
        assert_eq!(command.run(&input("Ada")).await.0, SubmissionState::Succeeded);
        assert_eq!(command.run(&input("A")).await.0, SubmissionState::Invalid);

        let refusing = Command::new(Refusing, Limits::default());
        let (state, outcome) = refusing.run(&input("Ada")).await;
        assert_eq!(state, SubmissionState::Failed);
        assert!(matches!(outcome, Outcome::Failed(TransportError::Status(500))));

        assert!(matches!(
            refusing.send(&input("Ada")).await,
            Err(folio_shared::Error::Transport(TransportError::Status(500)))
        ));
    }
}

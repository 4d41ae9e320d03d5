use std::time::{Duration, Instant};

use folio_contact::{
    Command, FAILURE_MESSAGE, INVALID_FORM_MESSAGE, Limits, SUCCESS_MESSAGE, SimulatedTransport,
    SubmissionState, sanitize_input, validate_contact_form,
};
use folio_shared::{Error, TransportError};

mod helpers;

#[tokio::test]
async fn test_valid_form_succeeds_after_latency() {
    let latency = Duration::from_millis(50);
    let command = Command::new(SimulatedTransport::new(latency), Limits::default());
    let input = helpers::valid_input();

    let started = Instant::now();
    let result = command.submit_form(&input).await;

    assert!(started.elapsed() >= latency);
    assert!(result.success);
    assert_eq!(result.message, SUCCESS_MESSAGE);
    assert_eq!(result.state, SubmissionState::Succeeded);
    assert!(result.errors.is_empty());

    let data = result.data.expect("sanitized data");
    assert_eq!(data.name, sanitize_input(&input.name));
    assert_eq!(data.email, sanitize_input(&input.email));
    assert_eq!(data.subject, sanitize_input(&input.subject));
    assert_eq!(
        data.message,
        "I would like to talk about &lt;notes&gt; &amp; &#x27;programs&#x27;."
    );
    assert!(data.timestamp.ends_with('Z'));
}

#[tokio::test]
async fn test_invalid_form_returns_without_delay() {
    let transport = helpers::RecordingTransport {
        delay: Duration::from_secs(10),
        ..Default::default()
    };
    let command = Command::new(transport.clone(), Limits::default());
    let input = helpers::invalid_input();

    let started = Instant::now();
    let result = command.submit_form(&input).await;

    assert!(started.elapsed() < Duration::from_secs(1));
    assert!(!result.success);
    assert_eq!(result.message, INVALID_FORM_MESSAGE);
    assert_eq!(result.state, SubmissionState::Invalid);
    assert!(result.data.is_none());
    assert_eq!(
        result.errors,
        validate_contact_form(&input, &Limits::default()).errors
    );
    assert!(transport.sent().is_empty());
}

#[tokio::test]
async fn test_transport_failure_reaches_failed_state() {
    let command = Command::new(
        helpers::FailingTransport(TransportError::Status(503)),
        Limits::default(),
    );

    let result = command.submit_form(&helpers::valid_input()).await;

    assert!(!result.success);
    assert_eq!(result.message, FAILURE_MESSAGE);
    assert_eq!(result.state, SubmissionState::Failed);
    assert!(result.data.is_none());
    assert!(result.errors.is_empty());
}

#[tokio::test]
async fn test_concurrent_submissions_are_independent() {
    let transport = helpers::RecordingTransport {
        delay: Duration::from_millis(20),
        ..Default::default()
    };
    let command = Command::new(transport.clone(), Limits::default());
    let input = helpers::valid_input();

    let (first, second) = tokio::join!(command.submit_form(&input), command.submit_form(&input));

    assert!(first.success && second.success);
    assert_eq!(transport.sent().len(), 2);
}

#[tokio::test]
async fn test_send_propagates_errors() {
    let command = Command::new(SimulatedTransport::new(Duration::ZERO), Limits::default());

    let payload = command.send(&helpers::valid_input()).await.unwrap();
    assert_eq!(payload.name, "Ada Lovelace");

    let err = command.send(&helpers::invalid_input()).await.unwrap_err();
    match err {
        Error::Validate(errors) => assert_eq!(errors.field_errors().len(), 4),
        other => panic!("unexpected error {other:?}"),
    }

    let failing = Command::new(
        helpers::FailingTransport(TransportError::Timeout),
        Limits::default(),
    );
    let err = failing.send(&helpers::valid_input()).await.unwrap_err();
    assert!(matches!(err, Error::Transport(TransportError::Timeout)));
}

#[tokio::test]
async fn test_submission_result_json_omits_empty_parts() -> anyhow::Result<()> {
    let command = Command::new(SimulatedTransport::new(Duration::ZERO), Limits::default());

    let invalid = serde_json::to_value(command.submit_form(&helpers::invalid_input()).await)?;
    assert_eq!(invalid["success"], false);
    assert_eq!(invalid["errors"].as_object().unwrap().len(), 4);
    assert!(invalid.get("data").is_none());
    assert!(invalid.get("state").is_none());

    let valid = serde_json::to_value(command.submit_form(&helpers::valid_input()).await)?;
    assert_eq!(valid["success"], true);
    assert!(valid.get("errors").is_none());
    assert_eq!(valid["data"]["name"], "Ada Lovelace");

    Ok(())
}

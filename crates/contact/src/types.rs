use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantArray};
use time::{OffsetDateTime, macros::format_description};

use crate::sanitize_input;

#[derive(
    EnumString,
    Display,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    /// Capitalized name used in user facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl ContactFormInput {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValidation {
    pub is_valid: bool,
    pub message: String,
}

impl FieldValidation {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: BTreeMap<Field, String>,
}

impl ValidationResult {
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Converts failing fields into [`validator::ValidationErrors`] so the
    /// outcome can be propagated with `?`.
    pub fn into_result(self) -> Result<(), validator::ValidationErrors> {
        if self.is_valid {
            return Ok(());
        }

        let mut errors = validator::ValidationErrors::new();
        for (field, message) in self.errors {
            errors.add(
                field.as_str(),
                validator::ValidationError::new("contact_form").with_message(message.into()),
            );
        }

        Err(errors)
    }
}

/// Sanitized copy of a submitted form, stamped with the submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizedSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub timestamp: String,
}

impl SanitizedSubmission {
    pub fn new(input: &ContactFormInput, at: OffsetDateTime) -> Self {
        Self {
            name: sanitize_input(&input.name),
            email: sanitize_input(&input.email),
            subject: sanitize_input(&input.subject),
            message: sanitize_input(&input.message),
            timestamp: iso_timestamp(at),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Invalid,
    Sanitizing,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    pub fn can_advance_to(&self, next: SubmissionState) -> bool {
        use SubmissionState::*;

        matches!(
            (self, next),
            (Idle, Validating)
                | (Validating, Invalid)
                | (Validating, Sanitizing)
                | (Sanitizing, Submitting)
                | (Submitting, Succeeded)
                | (Submitting, Failed)
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SubmissionState::Invalid | SubmissionState::Succeeded | SubmissionState::Failed
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<Field, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<SanitizedSubmission>,
    #[serde(skip)]
    pub state: SubmissionState,
}

/// Formats a UTC instant as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn iso_timestamp(at: OffsetDateTime) -> String {
    let at = at.to_offset(time::UtcOffset::UTC);

    at.format(format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
    ))
    .unwrap_or_else(|_| at.unix_timestamp().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_iso_timestamp() {
        assert_eq!(
            iso_timestamp(datetime!(2025-06-01 08:30:05.123456 UTC)),
            "2025-06-01T08:30:05.123Z"
        );
        assert_eq!(
            iso_timestamp(datetime!(2025-06-01 10:30:05 +2)),
            "2025-06-01T08:30:05.000Z"
        );
    }

    #[test]
    fn test_submission_transitions() {
        use SubmissionState::*;

        assert!(Idle.can_advance_to(Validating));
        assert!(Validating.can_advance_to(Invalid));
        assert!(Submitting.can_advance_to(Failed));
        assert!(!Idle.can_advance_to(Submitting));
        assert!(!Invalid.can_advance_to(Sanitizing));
        assert!(Failed.is_terminal());
        assert!(!Submitting.is_terminal());
    }
}

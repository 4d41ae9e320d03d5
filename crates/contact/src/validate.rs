use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;
use serde::Deserialize;
use strum::VariantArray;

use crate::{ContactFormInput, Field, FieldValidation, ValidationResult};

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Length bounds for each contact form field, in characters after trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub name_min: usize,
    pub name_max: usize,
    pub email_max: usize,
    pub subject_max: usize,
    pub message_min: usize,
    pub message_max: usize,
}

impl Limits {
    pub const DEFAULT: Limits = Limits {
        name_min: 2,
        name_max: 100,
        email_max: 254,
        subject_max: 200,
        message_min: 10,
        message_max: 2000,
    };

    pub fn validate_name(&self, name: &str) -> FieldValidation {
        check_length(Field::Name, name, self.name_min, self.name_max)
    }

    pub fn validate_email(&self, email: &str) -> FieldValidation {
        let checked = check_length(Field::Email, email, 1, self.email_max);
        if !checked.is_valid {
            return checked;
        }

        if !EMAIL_REGEX.is_match(email.trim()) {
            return FieldValidation::invalid("Please enter a valid email address");
        }

        checked
    }

    pub fn validate_subject(&self, subject: &str) -> FieldValidation {
        check_length(Field::Subject, subject, 1, self.subject_max)
    }

    pub fn validate_message(&self, message: &str) -> FieldValidation {
        check_length(Field::Message, message, self.message_min, self.message_max)
    }

    pub fn validate_field(&self, field: Field, value: &str) -> FieldValidation {
        match field {
            Field::Name => self.validate_name(value),
            Field::Email => self.validate_email(value),
            Field::Subject => self.validate_subject(value),
            Field::Message => self.validate_message(value),
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn check_length(field: Field, value: &str, min: usize, max: usize) -> FieldValidation {
    let len = value.trim().chars().count();

    if len == 0 {
        return FieldValidation::invalid(format!("{} is required", field.label()));
    }

    if len < min {
        return FieldValidation::invalid(format!(
            "{} must be at least {min} characters",
            field.label()
        ));
    }

    if len > max {
        return FieldValidation::invalid(format!("{} is too long", field.label()));
    }

    FieldValidation::valid()
}

pub fn validate_name(name: &str) -> FieldValidation {
    Limits::DEFAULT.validate_name(name)
}

pub fn validate_email(email: &str) -> FieldValidation {
    Limits::DEFAULT.validate_email(email)
}

pub fn validate_subject(subject: &str) -> FieldValidation {
    Limits::DEFAULT.validate_subject(subject)
}

pub fn validate_message(message: &str) -> FieldValidation {
    Limits::DEFAULT.validate_message(message)
}

/// Validates every field, collecting all failures in one pass.
pub fn validate_contact_form(input: &ContactFormInput, limits: &Limits) -> ValidationResult {
    let errors = Field::VARIANTS
        .iter()
        .filter_map(|field| {
            let checked = limits.validate_field(*field, input.get(*field));
            (!checked.is_valid).then_some((*field, checked.message))
        })
        .collect::<BTreeMap<_, _>>();

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

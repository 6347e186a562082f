// SPDX-License-Identifier: MPL-2.0
//! Contact form validation and submission state.
//!
//! Nothing is sent anywhere: submission is simulated by the page with a fixed
//! delay before the success toast.

use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Why a submission was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// At least one field is empty.
    MissingFields,
    /// The email address is malformed.
    InvalidEmail,
}

impl ValidationError {
    /// Returns the i18n key for the error toast.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ValidationError::MissingFields => "form-missing-fields",
            ValidationError::InvalidEmail => "form-invalid-email",
        }
    }
}

/// Field values of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Checks that every field is filled and the email looks like one.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }

    /// Clears every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// State of the submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    /// Enabled, showing its normal label.
    #[default]
    Idle,
    /// Disabled, showing the "sending" label.
    Sending,
}

impl SubmitState {
    #[must_use]
    pub fn is_disabled(self) -> bool {
        self == SubmitState::Sending
    }

    /// Returns the i18n key of the button label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            SubmitState::Idle => "form-submit",
            SubmitState::Sending => "form-sending",
        }
    }
}

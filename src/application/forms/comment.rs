//! Comment form state machine.
//!
//! ```text
//!            invalid (errors recorded, nothing sent)
//!              ┌──────┐
//!              ▼      │
//!   ──► Editing ──────┴──► Submitting ──► Submitted (terminal)
//!          ▲                   │
//!          └─── write failed ──┘
//! ```
//!
//! Exactly one write is issued per accepted submit. Nothing is retried.

use crate::{
    application::{
        ApplicationResult, dto::CommentSubmission, ports::submission::CommentSubmitter,
    },
    domain::{
        comment::{CommentText, CommenterEmail, CommenterName},
        errors::DomainError,
    },
};
use serde::Deserialize;

/// Acknowledgement shown in place of the form once a comment is accepted.
pub const ACKNOWLEDGEMENT_TITLE: &str = "Thank you for submitting your comment!";
pub const ACKNOWLEDGEMENT_BODY: &str = "Once it has been approved, it will appear below!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Editing,
    Submitting,
    Submitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Comment,
}

impl FormField {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Comment => "comment",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CommentFormValues {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub comment: String,
}

#[derive(Debug, Clone)]
pub struct CommentForm {
    article_id: String,
    values: CommentFormValues,
    state: FormState,
    errors: Vec<FieldError>,
}

impl CommentForm {
    pub fn new(article_id: impl Into<String>) -> Self {
        Self::with_values(article_id, CommentFormValues::default())
    }

    pub fn with_values(article_id: impl Into<String>, values: CommentFormValues) -> Self {
        Self {
            article_id: article_id.into(),
            values,
            state: FormState::Editing,
            errors: Vec::new(),
        }
    }

    pub fn article_id(&self) -> &str {
        &self.article_id
    }

    pub const fn state(&self) -> FormState {
        self.state
    }

    pub const fn values(&self) -> &CommentFormValues {
        &self.values
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn error_for(&self, field: FormField) -> Option<&FieldError> {
        self.errors.iter().find(|error| error.field == field)
    }

    /// Edit a field. Ignored outside of `Editing`.
    pub fn set_value(&mut self, field: FormField, value: impl Into<String>) {
        if self.state != FormState::Editing {
            return;
        }
        let slot = match field {
            FormField::Name => &mut self.values.name,
            FormField::Email => &mut self.values.email,
            FormField::Comment => &mut self.values.comment,
        };
        *slot = value.into();
    }

    /// Field checks, in display order. Empty when the form is valid.
    pub fn validate(&self) -> Vec<FieldError> {
        let checks = [
            (
                FormField::Name,
                CommenterName::new(self.values.name.as_str()).err(),
            ),
            (
                FormField::Email,
                CommenterEmail::new(self.values.email.as_str()).err(),
            ),
            (
                FormField::Comment,
                CommentText::new(self.values.comment.as_str()).err(),
            ),
        ];

        checks
            .into_iter()
            .filter_map(|(field, err)| {
                err.map(|err| FieldError {
                    field,
                    message: field_message(err),
                })
            })
            .collect()
    }

    /// Editing → Submitting. Returns the payload to send, or `None` when the
    /// form stays in `Editing` (validation errors are then in [`Self::errors`]).
    pub fn begin_submit(&mut self) -> Option<CommentSubmission> {
        if self.state != FormState::Editing {
            return None;
        }

        self.errors = self.validate();
        if !self.errors.is_empty() {
            return None;
        }

        self.state = FormState::Submitting;
        Some(CommentSubmission {
            article_id: self.article_id.clone(),
            name: self.values.name.clone(),
            email: self.values.email.clone(),
            comment: self.values.comment.clone(),
        })
    }

    /// Submitting → Submitted on success, back to Editing (values kept) on failure.
    pub fn complete(&mut self, outcome: ApplicationResult<()>) -> FormState {
        if self.state != FormState::Submitting {
            return self.state;
        }

        self.state = match outcome {
            Ok(()) => FormState::Submitted,
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    article_id = %self.article_id,
                    "comment submission failed"
                );
                FormState::Editing
            }
        };
        self.state
    }

    /// Validate and, when valid, send the submission through `submitter`.
    pub async fn submit(&mut self, submitter: &dyn CommentSubmitter) -> FormState {
        let Some(submission) = self.begin_submit() else {
            return self.state;
        };

        let outcome = submitter.submit(submission).await;
        self.complete(outcome)
    }
}

fn field_message(err: DomainError) -> String {
    match err {
        DomainError::Validation(msg) => msg,
        other => other.to_string(),
    }
}

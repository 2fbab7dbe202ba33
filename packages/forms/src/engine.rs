//! # Form engine: field state, validation and submission
//!
//! [`FormState`] is the working copy of one mounted form. It is created from a
//! static [`FormSchema`], mutated on every edit, blur and submit, and dropped when
//! the view goes away.
//!
//! ## Errors
//!
//! Errors are only ever stored for touched fields, and are always the result of
//! running the field's rule against its current value: [`FormState::blur_field`]
//! and [`FormState::set_field`] (for already touched fields) recompute a single
//! entry, [`FormState::begin_submit`] touches and recomputes every field. There is
//! no other way for an error to appear or disappear.
//!
//! ## Submission
//!
//! Submission is split in two so reactive views never hold the state across an
//! await:
//!
//! 1. [`begin_submit`](FormState::begin_submit) validates everything and either
//!    refuses ([`SubmitBlocked`]) or switches to [`SubmitStatus::Submitting`] and
//!    returns a [`FormSnapshot`] for the external handler.
//! 2. [`complete`](FormState::complete) records the handler's [`Outcome`].

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use crate::field::{FieldSpec, FieldValue, FileHandle, YesNo};

/// Static description of a form.
#[derive(Debug, PartialEq, Eq)]
pub struct FormSchema {
    pub fields: &'static [FieldSpec],
    /// Shown after a successful submission whose response carried no message.
    pub success_fallback: &'static str,
    /// Shown after a failed submission whose response carried no message.
    pub failure_fallback: &'static str,
    /// Clear the fields (keeping the success message) once submission succeeds.
    pub reset_on_success: bool,
}

impl FormSchema {
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

/// Result reported by the external submit handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Accepted, with the message from the response if it had one.
    Accepted(Option<String>),
    /// Refused or failed, with the message from the response if it had one.
    Rejected(Option<String>),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitBlocked {
    #[error("form has validation errors")]
    Invalid,
    #[error("a submission is already in flight")]
    InFlight,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("unknown field `{0}`")]
    Unknown(String),
    #[error("value does not fit field `{0}`")]
    Mismatch(&'static str),
}

/// Immutable copy of the field values handed to the submit handler.
#[derive(Clone, Debug, PartialEq)]
pub struct FormSnapshot {
    values: BTreeMap<&'static str, FieldValue>,
}

impl FormSnapshot {
    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Trimmed text of a text or numeric field, empty when absent.
    pub fn text(&self, name: &str) -> &str {
        match self.values.get(name) {
            Some(FieldValue::Text(text)) => text.trim(),
            _ => "",
        }
    }

    pub fn choice(&self, name: &str) -> Option<YesNo> {
        match self.values.get(name) {
            Some(FieldValue::Choice(choice)) => *choice,
            _ => None,
        }
    }

    pub fn file(&self, name: &str) -> Option<&FileHandle> {
        match self.values.get(name) {
            Some(FieldValue::File(file)) => file.as_ref(),
            _ => None,
        }
    }
}

/// Working state of a mounted form.
#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    schema: &'static FormSchema,
    values: BTreeMap<&'static str, FieldValue>,
    touched: BTreeSet<&'static str>,
    errors: BTreeMap<&'static str, &'static str>,
    status: SubmitStatus,
}

impl FormState {
    pub fn new(schema: &'static FormSchema) -> Self {
        Self {
            schema,
            values: default_values(schema),
            touched: BTreeSet::new(),
            errors: BTreeMap::new(),
            status: SubmitStatus::Idle,
        }
    }

    pub fn schema(&self) -> &'static FormSchema {
        self.schema
    }

    /// Replace a field's value. Does not touch the field.
    pub fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), FieldError> {
        let spec = self.spec(name)?;
        if !spec.accepts(&value) {
            return Err(FieldError::Mismatch(spec.name));
        }
        self.values.insert(spec.name, value);
        if self.touched.contains(spec.name) {
            self.revalidate(spec);
        }
        Ok(())
    }

    pub fn set_text(&mut self, name: &str, text: impl Into<String>) -> Result<(), FieldError> {
        self.set_field(name, FieldValue::Text(text.into()))
    }

    pub fn set_choice(&mut self, name: &str, choice: Option<YesNo>) -> Result<(), FieldError> {
        self.set_field(name, FieldValue::Choice(choice))
    }

    pub fn set_file(&mut self, name: &str, file: Option<FileHandle>) -> Result<(), FieldError> {
        self.set_field(name, FieldValue::File(file))
    }

    /// Mark a field touched and validate it.
    pub fn blur_field(&mut self, name: &str) -> Result<(), FieldError> {
        let spec = self.spec(name)?;
        self.touched.insert(spec.name);
        self.revalidate(spec);
        Ok(())
    }

    /// Touch and validate every field, then enter [`SubmitStatus::Submitting`]
    /// if nothing failed.
    pub fn begin_submit(&mut self) -> Result<FormSnapshot, SubmitBlocked> {
        if self.status == SubmitStatus::Submitting {
            return Err(SubmitBlocked::InFlight);
        }
        for spec in self.schema.fields {
            self.touched.insert(spec.name);
            self.revalidate(spec);
        }
        if !self.errors.is_empty() {
            tracing::debug!(errors = self.errors.len(), "Submission blocked by validation");
            return Err(SubmitBlocked::Invalid);
        }
        self.status = SubmitStatus::Submitting;
        Ok(FormSnapshot {
            values: self.values.clone(),
        })
    }

    /// Record the result of the submission started by [`begin_submit`](Self::begin_submit).
    ///
    /// Ignored when no submission is in flight, e.g. after a reset.
    pub fn complete(&mut self, outcome: Outcome) {
        if self.status != SubmitStatus::Submitting {
            tracing::debug!("Dropping late submission result");
            return;
        }
        self.status = match outcome {
            Outcome::Accepted(message) => {
                if self.schema.reset_on_success {
                    self.clear_fields();
                }
                SubmitStatus::Succeeded(
                    message.unwrap_or_else(|| self.schema.success_fallback.to_string()),
                )
            }
            Outcome::Rejected(message) => SubmitStatus::Failed(
                message.unwrap_or_else(|| self.schema.failure_fallback.to_string()),
            ),
        };
    }

    /// Back to the state of a freshly mounted form.
    pub fn reset(&mut self) {
        self.clear_fields();
        self.status = SubmitStatus::Idle;
    }

    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Raw text of a text or numeric field, empty when absent.
    pub fn text(&self, name: &str) -> &str {
        match self.values.get(name) {
            Some(FieldValue::Text(text)) => text,
            _ => "",
        }
    }

    pub fn choice(&self, name: &str) -> Option<YesNo> {
        match self.values.get(name) {
            Some(FieldValue::Choice(choice)) => *choice,
            _ => None,
        }
    }

    pub fn file(&self, name: &str) -> Option<&FileHandle> {
        match self.values.get(name) {
            Some(FieldValue::File(file)) => file.as_ref(),
            _ => None,
        }
    }

    /// Visible error of a field (only touched fields can have one).
    pub fn error(&self, name: &str) -> Option<&'static str> {
        self.errors.get(name).copied()
    }

    pub fn errors(&self) -> &BTreeMap<&'static str, &'static str> {
        &self.errors
    }

    pub fn is_touched(&self, name: &str) -> bool {
        self.touched.contains(name)
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    pub fn success_message(&self) -> Option<&str> {
        match &self.status {
            SubmitStatus::Succeeded(message) => Some(message),
            _ => None,
        }
    }

    pub fn failure_message(&self) -> Option<&str> {
        match &self.status {
            SubmitStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    fn spec(&self, name: &str) -> Result<&'static FieldSpec, FieldError> {
        self.schema
            .field(name)
            .ok_or_else(|| FieldError::Unknown(name.to_string()))
    }

    fn revalidate(&mut self, spec: &'static FieldSpec) {
        let error = self.values.get(spec.name).and_then(|v| spec.check(v));
        match error {
            Some(message) => {
                self.errors.insert(spec.name, message);
            }
            None => {
                self.errors.remove(spec.name);
            }
        }
    }

    fn clear_fields(&mut self) {
        self.values = default_values(self.schema);
        self.touched.clear();
        self.errors.clear();
    }
}

fn default_values(schema: &FormSchema) -> BTreeMap<&'static str, FieldValue> {
    schema
        .fields
        .iter()
        .map(|spec| (spec.name, spec.default_value()))
        .collect()
}

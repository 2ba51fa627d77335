//! Required-field validation on form submit.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::consts::{FORM_ERROR_MESSAGE, FORM_SUCCESS_MESSAGE};
use crate::notify::Severity;

/// Per-field result of checking a form's `[required]` fields, in document order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Validation {
    fields: Vec<bool>,
}

impl Validation {
    /// A required field is valid when its value is non-blank after trimming.
    pub fn check<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self { fields: values.into_iter().map(|v| !v.as_ref().trim().is_empty()).collect() }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|ok| *ok)
    }

    /// Validity of each field; `false` entries get the `error` class.
    #[must_use]
    pub fn fields(&self) -> &[bool] {
        &self.fields
    }

    #[must_use]
    pub fn invalid_count(&self) -> usize {
        self.fields.iter().filter(|ok| !**ok).count()
    }
}

/// Messages shown after a submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormMessages {
    pub success: String,
    pub error: String,
}

impl Default for FormMessages {
    fn default() -> Self {
        Self { success: FORM_SUCCESS_MESSAGE.to_owned(), error: FORM_ERROR_MESSAGE.to_owned() }
    }
}

impl FormMessages {
    /// The single notification a submit produces.
    #[must_use]
    pub fn outcome(&self, validation: &Validation) -> (Severity, &str) {
        if validation.is_valid() {
            (Severity::Success, self.success.as_str())
        } else {
            (Severity::Error, self.error.as_str())
        }
    }
}

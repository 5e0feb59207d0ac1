use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

// ASCII digits only; `\d` in the regex crate is Unicode-aware.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\s\-+()]{10,}$").expect("valid phone regex"));

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Password,
    Tel,
    Select,
    Textarea,
}

/// A form control as the validator sees it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub id: String,
    pub kind: FieldKind,
    pub value: String,
    pub required: bool,
    /// Minimum length for password fields.
    pub min_length: Option<usize>,
    /// Id of the field this one must equal (password confirmation).
    pub must_match: Option<String>,
}

impl Field {
    pub fn new(id: impl Into<String>, kind: FieldKind, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            value: value.into(),
            ..Default::default()
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn must_match(mut self, other_id: impl Into<String>) -> Self {
        self.must_match = Some(other_id.into());
        self
    }
}

/// The first rule a field fails. `Display` is the message shown under it.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum FieldError {
    #[error("This field is required")]
    Required,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Please enter a valid phone number")]
    InvalidPhone,

    #[error("Passwords do not match")]
    Mismatch,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Form {
    pub fields: Vec<Field>,
}

impl Form {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    pub fn field(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormReport {
    pub errors: BTreeMap<String, FieldError>,
}

impl FormReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validates one field. Rules run in order and stop at the first failure:
/// required, email, password length, phone, confirmation match.
///
/// The value is trimmed for every check; the confirmation target's value is
/// compared as typed.
pub fn validate_field(field: &Field, form: &Form) -> Result<(), FieldError> {
    let value = field.value.trim();

    if field.required && value.is_empty() {
        return Err(FieldError::Required);
    }

    if field.kind == FieldKind::Email && !value.is_empty() && !EMAIL_RE.is_match(value) {
        return Err(FieldError::InvalidEmail);
    }

    if field.kind == FieldKind::Password && !value.is_empty() {
        if let Some(min) = field.min_length {
            if value.chars().count() < min {
                return Err(FieldError::PasswordTooShort { min });
            }
        }
    }

    if field.kind == FieldKind::Tel && !value.is_empty() && !PHONE_RE.is_match(value) {
        return Err(FieldError::InvalidPhone);
    }

    if let Some(other) = field.must_match.as_deref().and_then(|id| form.field(id)) {
        if value != other.value {
            return Err(FieldError::Mismatch);
        }
    }

    Ok(())
}

/// Validates every required field, collecting all failures.
pub fn validate_form(form: &Form) -> FormReport {
    let errors = form
        .fields
        .iter()
        .filter(|f| f.required)
        .filter_map(|f| validate_field(f, form).err().map(|e| (f.id.clone(), e)))
        .collect();
    FormReport { errors }
}

// src/shared/validation.rs
//
// Field-level checks shared by every write path. A failed check names the
// offending field; callers reject the whole write (no partial updates).

use std::sync::LazyLock;

use email_address::EmailAddress;
use regex::Regex;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s]+$").expect("valid URL pattern"));

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Required text: non-empty after trimming.
pub fn require(field: &'static str, value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::new(field, "must not be empty"));
    }
    Ok(())
}

pub fn max_len(field: &'static str, value: &str, max: usize) -> Result<(), FieldError> {
    if value.chars().count() > max {
        return Err(FieldError::new(
            field,
            format!("must be at most {max} characters"),
        ));
    }
    Ok(())
}

/// URL syntax for optional link fields; an empty string means "not set"
/// and passes.
pub fn optional_url(field: &'static str, value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Ok(());
    }
    if !URL_RE.is_match(value) {
        return Err(FieldError::new(field, "must be a valid http(s) URL"));
    }
    Ok(())
}

pub fn email(field: &'static str, value: &str) -> Result<(), FieldError> {
    if !EmailAddress::is_valid(value) {
        return Err(FieldError::new(field, "must be a valid email address"));
    }
    Ok(())
}

pub fn int_range(field: &'static str, value: i32, min: i32, max: i32) -> Result<(), FieldError> {
    if value < min || value > max {
        return Err(FieldError::new(
            field,
            format!("must be between {min} and {max}"),
        ));
    }
    Ok(())
}

//! Shared validation rules used by the request and record derives.

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use crate::constants::{ENTITY_NAME_PATTERN, PHONE_NUMBER_PATTERN};

/// Lowercase letters, digits and hyphens only.
pub static ENTITY_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(ENTITY_NAME_PATTERN).expect("entity name pattern is valid"));

/// Digits only.
pub static PHONE_NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(PHONE_NUMBER_PATTERN).expect("phone number pattern is valid"));

/// Reject empty or whitespace-only input.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Reject any whitespace character.
pub fn no_whitespace(value: &str) -> Result<(), ValidationError> {
    if value.chars().any(char::is_whitespace) {
        return Err(ValidationError::new("no_whitespace"));
    }
    Ok(())
}

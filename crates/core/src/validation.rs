//! Input validation for user-supplied text fields.
//!
//! DTOs carry `validator` length bounds; these helpers add the checks derive
//! attributes cannot express (blank-after-trim, nested optional fields) and
//! turn `ValidationErrors` into [`CoreError::InvalidInput`].

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a username in characters.
pub const MAX_USERNAME_LENGTH: usize = 80;

/// Maximum length of a plaintext password in characters.
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Maximum length of a category name (matches `categories.name VARCHAR(100)`).
pub const MAX_CATEGORY_NAME_LENGTH: usize = 100;

/// Maximum length of a note title (matches `notes.title VARCHAR(50)`).
pub const MAX_NOTE_TITLE_LENGTH: usize = 50;

/// Maximum length of note content (matches `notes.content VARCHAR(500)`).
pub const MAX_NOTE_CONTENT_LENGTH: usize = 500;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Run the derived `validator` rules on a DTO.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::InvalidInput(describe(&errors)))
}

/// Trim a required text field and check it is non-blank and within `max`
/// characters. Returns the trimmed value.
pub fn require_text<'a>(field: &str, value: &'a str, max: usize) -> Result<&'a str, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidInput(format!("{field} is required")));
    }
    check_max_length(field, trimmed, max)?;
    Ok(trimmed)
}

/// Reject `value` if it is longer than `max` characters.
pub fn check_max_length(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    if value.chars().count() > max {
        return Err(CoreError::InvalidInput(format!(
            "{field} exceeds maximum length of {max} characters"
        )));
    }
    Ok(())
}

/// Flatten `ValidationErrors` into one human-readable, deterministic message.
fn describe(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

//! Human-readable formatting of validation failures.
//!
//! The validation pass itself is pure; everything user-facing (message
//! rendering, the warn log) lives here so a response formatter can map a
//! failure to a structured 400 body.

use validator::{ValidationError, ValidationErrors};

/// Formats a single violation with its field name.
///
/// Prefers the violation's own message; falls back to a generic message
/// derived from the error code.
pub fn format_violation(field: &str, error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return format!("Field '{}': {}", field, message);
    }

    let message = match error.code.as_ref() {
        "missing_field" => "is required and cannot be empty",
        "invalid_format" => "does not match the required format",
        "invalid_type" => "has the wrong type",
        code => return format!("Field '{}' failed validation: {}", field, code),
    };

    format!("Field '{}' {}", field, message)
}

/// Renders one message per violation, across all fields.
pub fn violation_messages(errors: &ValidationErrors) -> Vec<String> {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, field_errors)| {
            field_errors
                .iter()
                .map(move |error| format_violation(field, error))
        })
        .collect()
}

/// Summarizes a validation failure into a single user-facing message.
pub fn summarize(errors: &ValidationErrors) -> String {
    tracing::warn!(
        errors = ?errors.field_errors(),
        "Request validation failed"
    );

    let messages = violation_messages(errors);
    match messages.as_slice() {
        [] => "Validation failed".to_string(),
        [single_message] => single_message.clone(),
        multiple => multiple.join(". "),
    }
}

//! Request validation utilities.

use std::borrow::Cow;

use serde_json::Value;
use strum::{AsRefStr, IntoStaticStr};
use uuid::Uuid;
use validator::ValidationError;

/// Kinds of constraints a request field can violate.
///
/// The snake_case form of each variant is used as the machine-readable
/// error code on the resulting [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ConstraintKind {
    /// Required field absent, `null`, or empty.
    MissingField,
    /// Field present but not matching the required syntactic shape.
    InvalidFormat,
    /// Field present but of the wrong kind.
    InvalidType,
}

pub fn constraint_violation(
    kind: ConstraintKind,
    message: impl Into<Cow<'static, str>>,
) -> ValidationError {
    let mut error = ValidationError::new(kind.into());
    error.message = Some(message.into());
    error
}

/// Checks a required identifier field: present, non-empty, and a canonical
/// 8-4-4-4-12 hexadecimal UUID (case-insensitive).
pub(crate) fn require_uuid(value: Option<&Value>) -> Result<Uuid, ValidationError> {
    match value {
        None | Some(Value::Null) => Err(constraint_violation(
            ConstraintKind::MissingField,
            "is required and cannot be empty",
        )),
        Some(Value::String(text)) if text.is_empty() => Err(constraint_violation(
            ConstraintKind::MissingField,
            "is required and cannot be empty",
        )),
        Some(Value::String(text)) => parse_canonical_uuid(text).ok_or_else(|| {
            constraint_violation(
                ConstraintKind::InvalidFormat,
                "must be a valid UUID (e.g., 123e4567-e89b-12d3-a456-426614174000)",
            )
        }),
        Some(_) => Err(constraint_violation(
            ConstraintKind::InvalidType,
            "must be a string",
        )),
    }
}

/// Checks a required text field: present, string-typed, and non-empty.
///
/// Emptiness is checked on the raw value; no trimming is applied.
pub(crate) fn require_text(value: Option<&Value>) -> Result<String, ValidationError> {
    match value {
        None | Some(Value::Null) => Err(constraint_violation(
            ConstraintKind::MissingField,
            "is required and cannot be empty",
        )),
        Some(Value::String(text)) if text.is_empty() => Err(constraint_violation(
            ConstraintKind::MissingField,
            "is required and cannot be empty",
        )),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(_) => Err(constraint_violation(
            ConstraintKind::InvalidType,
            "must be a string",
        )),
    }
}

/// Checks an optional sequence-of-strings field.
///
/// Absent (or `null`) is valid and yields `None`. A present value must be a
/// sequence, and every element must independently be a string; one violation
/// is reported per offending element, naming its position.
pub(crate) fn optional_string_seq(
    value: Option<&Value>,
) -> Result<Option<Vec<String>>, Vec<ValidationError>> {
    let items = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(vec![constraint_violation(
                ConstraintKind::InvalidType,
                "must be an array of strings",
            )]);
        }
    };

    let mut tags = Vec::with_capacity(items.len());
    let mut errors = Vec::new();

    for (index, item) in items.iter().enumerate() {
        match item {
            Value::String(tag) => tags.push(tag.clone()),
            _ => errors.push(constraint_violation(
                ConstraintKind::InvalidType,
                format!("Tag #{} must be a string", index + 1),
            )),
        }
    }

    if errors.is_empty() {
        Ok(Some(tags))
    } else {
        Err(errors)
    }
}

/// Parses a UUID, accepting only the canonical hyphenated grouping.
///
/// `Uuid::try_parse` also accepts simple, braced, and URN forms, so the
/// input is compared against the hyphenated re-encoding to rule those out.
fn parse_canonical_uuid(text: &str) -> Option<Uuid> {
    let parsed = Uuid::try_parse(text).ok()?;
    if parsed.hyphenated().to_string() == text.to_ascii_lowercase() {
        Some(parsed)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn constraint_kind_codes() {
        assert_eq!(ConstraintKind::MissingField.as_ref(), "missing_field");
        assert_eq!(ConstraintKind::InvalidFormat.as_ref(), "invalid_format");
        assert_eq!(ConstraintKind::InvalidType.as_ref(), "invalid_type");
    }

    #[test]
    fn canonical_uuid_accepted() {
        let value = json!("123e4567-e89b-12d3-a456-426614174000");
        let id = require_uuid(Some(&value)).unwrap();
        assert_eq!(id.to_string(), "123e4567-e89b-12d3-a456-426614174000");
    }

    #[test]
    fn uppercase_uuid_accepted() {
        let value = json!("123E4567-E89B-12D3-A456-426614174000");
        assert!(require_uuid(Some(&value)).is_ok());
    }

    #[test]
    fn non_canonical_uuid_forms_rejected() {
        for text in [
            "not-a-uuid",
            "123e4567e89b12d3a456426614174000",
            "{123e4567-e89b-12d3-a456-426614174000}",
            "urn:uuid:123e4567-e89b-12d3-a456-426614174000",
            "123e4567-e89b-12d3-a456-42661417400",
        ] {
            let value = json!(text);
            let error = require_uuid(Some(&value)).unwrap_err();
            assert_eq!(error.code, "invalid_format", "input: {text}");
        }
    }

    #[test]
    fn absent_and_empty_uuid_are_missing() {
        let error = require_uuid(None).unwrap_err();
        assert_eq!(error.code, "missing_field");

        let null = Value::Null;
        let error = require_uuid(Some(&null)).unwrap_err();
        assert_eq!(error.code, "missing_field");

        let empty = json!("");
        let error = require_uuid(Some(&empty)).unwrap_err();
        assert_eq!(error.code, "missing_field");
    }

    #[test]
    fn non_string_uuid_is_wrong_type() {
        let value = json!(42);
        let error = require_uuid(Some(&value)).unwrap_err();
        assert_eq!(error.code, "invalid_type");
    }

    #[test]
    fn text_presence_and_type() {
        let value = json!("body");
        assert_eq!(require_text(Some(&value)).unwrap(), "body");

        assert_eq!(require_text(None).unwrap_err().code, "missing_field");

        let empty = json!("");
        assert_eq!(require_text(Some(&empty)).unwrap_err().code, "missing_field");

        let number = json!(7);
        assert_eq!(require_text(Some(&number)).unwrap_err().code, "invalid_type");
    }

    #[test]
    fn whitespace_text_is_not_trimmed() {
        let value = json!("   ");
        assert_eq!(require_text(Some(&value)).unwrap(), "   ");
    }

    #[test]
    fn absent_tags_are_valid() {
        assert_eq!(optional_string_seq(None).unwrap(), None);

        let null = Value::Null;
        assert_eq!(optional_string_seq(Some(&null)).unwrap(), None);
    }

    #[test]
    fn empty_and_string_tags_are_valid() {
        let empty = json!([]);
        assert_eq!(optional_string_seq(Some(&empty)).unwrap(), Some(vec![]));

        let tags = json!(["finance", "q3"]);
        assert_eq!(
            optional_string_seq(Some(&tags)).unwrap(),
            Some(vec!["finance".to_owned(), "q3".to_owned()])
        );
    }

    #[test]
    fn non_sequence_tags_are_wrong_type() {
        let value = json!("finance");
        let errors = optional_string_seq(Some(&value)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, "invalid_type");
    }

    #[test]
    fn each_bad_tag_element_is_reported() {
        let value = json!(["a", 2, "c", null]);
        let errors = optional_string_seq(Some(&value)).unwrap_err();
        assert_eq!(errors.len(), 2);

        let messages: Vec<_> = errors
            .iter()
            .map(|error| error.message.clone().unwrap_or_default())
            .collect();
        assert!(messages[0].contains("Tag #2"));
        assert!(messages[1].contains("Tag #4"));
    }
}

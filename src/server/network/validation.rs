//! Validation failure collection and message joining.
//!
//! DTOs declare their rules with `validator` derive attributes. When validation fails,
//! the raw `ValidationErrors` (an unordered map) are flattened into an ordered list of
//! `FieldFailure`s following the DTO's declared field order. The DTO's message hook
//! turns each failure into a human-readable message, and the messages are joined into
//! a single string for the `InvalidInput` error.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::server::network::error::RequestError;

/// Separator placed between the messages of failing fields.
pub const MESSAGE_SEPARATOR: &str = ", ";

/// Rule code used by the `required_*` validators.
pub const RULE_REQUIRED: &str = "required";

/// Typed request container bound from a request body, query string or headers.
///
/// Implementors declare their validation rules with `#[derive(Validate)]` and provide
/// the per-field message hook used to build the error shown to clients.
pub trait Dto: DeserializeOwned + Validate {
    /// Field names in declaration order.
    ///
    /// Failures are reported in this order. `validator` keys a field renamed with
    /// `#[serde(rename)]` by its serialized name, so renamed fields are listed under
    /// both their Rust and serialized names. Header DTOs must list the lowercase header
    /// names here, as `bind_headers` reads no other headers.
    const FIELDS: &'static [&'static str];

    /// Translates field failures into human-readable messages.
    ///
    /// Called once per failed validation with the failures already ordered. Returning
    /// an error aborts message construction and the error is propagated as is.
    fn validate_errors(&self, failures: &[FieldFailure]) -> Result<Vec<String>, RequestError>;
}

/// A single failing field: its path, the rule that failed and the rule's parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFailure {
    /// Field path, dotted for nested structs and indexed for lists (`items[0].name`)
    pub field: String,
    /// Rule code reported by `validator` (`required`, `length`, `range`, `url`, ...)
    pub rule: String,
    /// Message attached to the rule declaration, if any
    pub message: Option<String>,
    /// Rule parameters such as `min` and `max`
    pub params: BTreeMap<String, Value>,
}

impl FieldFailure {
    fn from_error(field: String, error: &ValidationError) -> Self {
        Self {
            field,
            rule: error.code.to_string(),
            message: error.message.as_ref().map(|m| m.to_string()),
            params: error
                .params
                .iter()
                .filter(|(name, _)| **name != "value")
                .map(|(name, value)| (name.to_string(), value.clone()))
                .collect(),
        }
    }

    /// Returns whether this failure is for `field` with rule `rule`.
    pub fn is(&self, field: &str, rule: &str) -> bool {
        self.field == field && self.rule == rule
    }

    /// Returns a rule parameter rendered as text, e.g. the `min` of a `length` rule.
    pub fn param(&self, name: &str) -> Option<String> {
        self.params.get(name).map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// Generic message for this failure using `label` as the field's display name.
    ///
    /// DTO message tables fall back to this for rules they don't word themselves.
    pub fn default_message(&self, label: &str) -> String {
        if let Some(message) = &self.message {
            return message.clone();
        }

        match (self.rule.as_str(), self.param("min"), self.param("max")) {
            (RULE_REQUIRED, _, _) => format!("{} is required", label),
            ("length", Some(min), Some(max)) => {
                format!("{} must be between {} and {} characters", label, min, max)
            }
            ("length", Some(min), None) => format!("{} must be at least {} characters", label, min),
            ("length", None, Some(max)) => format!("{} must be at most {} characters", label, max),
            ("range", Some(min), Some(max)) => {
                format!("{} must be between {} and {}", label, min, max)
            }
            ("range", Some(min), None) => format!("{} must be at least {}", label, min),
            ("range", None, Some(max)) => format!("{} must be at most {}", label, max),
            ("url", _, _) => format!("{} must be a valid url", label),
            ("email", _, _) => format!("{} must be a valid email", label),
            _ => format!("{} is invalid", label),
        }
    }
}

/// Flattens `errors` into one failure per field, ordered by `order`.
///
/// A field with several failing rules reports `required` if it failed, otherwise the
/// first recorded rule. Nested paths keep the position of their top-level field and
/// are ordered among themselves by name, list indices numerically. Fields missing from
/// `order` are placed last.
pub fn collect_failures(errors: &ValidationErrors, order: &[&str]) -> Vec<FieldFailure> {
    let mut failures = Vec::new();
    flatten(errors, None, &mut failures);

    let position = |failure: &FieldFailure| {
        let top_level = failure
            .field
            .split(['.', '['])
            .next()
            .unwrap_or(failure.field.as_str());
        order
            .iter()
            .position(|name| *name == top_level)
            .unwrap_or(usize::MAX)
    };

    failures.sort_by(|a, b| {
        position(a)
            .cmp(&position(b))
            .then_with(|| path_key(&a.field).cmp(&path_key(&b.field)))
    });

    failures
}

/// Splits `items[10].name` into `[("items", Some(10)), ("name", None)]`.
fn path_key(path: &str) -> Vec<(&str, Option<usize>)> {
    path.split('.')
        .map(|segment| {
            match segment
                .strip_suffix(']')
                .and_then(|s| s.split_once('['))
            {
                Some((name, index)) => (name, index.parse().ok()),
                None => (segment, None),
            }
        })
        .collect()
}

fn flatten(errors: &ValidationErrors, prefix: Option<&str>, out: &mut Vec<FieldFailure>) {
    for (name, kind) in errors.errors() {
        let path = match prefix {
            Some(prefix) => format!("{}.{}", prefix, name),
            None => name.to_string(),
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                let primary = field_errors
                    .iter()
                    .find(|e| e.code == RULE_REQUIRED)
                    .or_else(|| field_errors.first());

                if let Some(error) = primary {
                    out.push(FieldFailure::from_error(path, error));
                }
            }
            ValidationErrorsKind::Struct(nested) => flatten(nested, Some(&path), out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    flatten(nested, Some(&format!("{}[{}]", path, index)), out);
                }
            }
        }
    }
}

/// Joins messages with `", "`, skipping blank entries.
///
/// Returns `None` when nothing is left to join so callers never surface an empty
/// message.
pub fn join_messages<S: AsRef<str>>(messages: &[S]) -> Option<String> {
    let parts: Vec<&str> = messages
        .iter()
        .map(|m| m.as_ref())
        .filter(|m| !m.trim().is_empty())
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(MESSAGE_SEPARATOR))
    }
}

/// Builds the error returned for a DTO that failed validation.
///
/// Errors from the DTO's message hook are returned unchanged. If the hook produced
/// only blank messages, the generic message of each failure is used instead.
pub fn process_errors<T: Dto>(dto: &T, errors: &ValidationErrors) -> RequestError {
    let failures = collect_failures(errors, T::FIELDS);

    let messages = match dto.validate_errors(&failures) {
        Ok(messages) => messages,
        Err(e) => return e,
    };

    let joined = join_messages(&messages)
        .or_else(|| {
            let defaults: Vec<String> = failures
                .iter()
                .map(|f| f.default_message(&f.field))
                .collect();
            join_messages(&defaults)
        })
        .unwrap_or_else(|| errors.to_string());

    RequestError::InvalidInput(joined)
}

/// Runs the message lookup for each failure.
///
/// `lookup` returns `None` for failures it has no wording for, which becomes
/// `RequestError::MissingMessage`.
pub fn translate<F>(failures: &[FieldFailure], lookup: F) -> Result<Vec<String>, RequestError>
where
    F: Fn(&FieldFailure) -> Option<String>,
{
    failures
        .iter()
        .map(|failure| {
            lookup(failure).ok_or_else(|| RequestError::MissingMessage {
                field: failure.field.clone(),
                rule: failure.rule.clone(),
            })
        })
        .collect()
}

/// Fails with `required` when the text is empty or only whitespace.
pub fn required_text(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(RULE_REQUIRED));
    }
    Ok(())
}

/// Fails with `required` when the list is empty and with `uppercase` when any entry
/// is blank or contains lowercase letters.
pub fn tag_list(value: &[String]) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(RULE_REQUIRED));
    }

    let valid = value
        .iter()
        .all(|item| !item.trim().is_empty() && !item.chars().any(char::is_lowercase));

    if !valid {
        return Err(ValidationError::new("uppercase"));
    }
    Ok(())
}

/// Fails with `required` when empty and with `slug` unless the text is lowercase ASCII
/// words joined by single hyphens.
pub fn slug_format(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(RULE_REQUIRED));
    }

    let valid = value.split('-').all(|word| {
        !word.is_empty()
            && word
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    });

    if !valid {
        return Err(ValidationError::new("slug"));
    }
    Ok(())
}

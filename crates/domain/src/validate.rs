//! Field-level validation for user input.
//!
//! Explicit functions rather than derive macros: each returns the full
//! list of violations so the transport layer can report every failed
//! field at once.

use url::Url;

use crate::{NewUser, UserPatch};

/// Maximum accepted length for first and last names, in characters.
pub const NAME_MAX_LENGTH: usize = 100;

/// A single violated validation rule on one input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Wire name of the offending field.
    pub field: &'static str,
    /// Stable rule identifier, e.g. `not_empty` or `url`.
    pub rule: &'static str,
    /// Human-readable description of the violation.
    pub message: String,
}

impl FieldViolation {
    fn new(field: &'static str, rule: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            rule,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{} ({}): {}", self.field, self.rule, self.message)
    }
}

/// Validates the fields of a create request.
///
/// Returns every violation found; an empty list means the input is valid.
#[must_use]
pub fn validate_new_user(input: &NewUser) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    check_name("firstName", &input.first_name, &mut violations);
    check_name("lastName", &input.last_name, &mut violations);
    check_number("height", input.height, &mut violations);
    check_number("weight", input.weight, &mut violations);

    if input.address.is_empty() {
        violations.push(FieldViolation::new(
            "address",
            "not_empty",
            "address must not be empty",
        ));
    }

    check_photo(&input.photo, &mut violations);

    violations
}

/// Validates the fields present on a partial update.
///
/// Absent fields are skipped entirely; they keep their stored value and
/// have nothing to validate.
#[must_use]
pub fn validate_user_patch(patch: &UserPatch) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    if let Some(ref first_name) = patch.first_name {
        check_name("firstName", first_name, &mut violations);
    }

    if let Some(ref last_name) = patch.last_name {
        check_name("lastName", last_name, &mut violations);
    }

    if let Some(height) = patch.height {
        check_number("height", height, &mut violations);
    }

    if let Some(weight) = patch.weight {
        check_number("weight", weight, &mut violations);
    }

    if let Some(ref address) = patch.address
        && address.is_empty()
    {
        violations.push(FieldViolation::new(
            "address",
            "not_empty",
            "address must not be empty",
        ));
    }

    if let Some(ref photo) = patch.photo {
        check_photo(photo, &mut violations);
    }

    violations
}

fn check_name(field: &'static str, value: &str, violations: &mut Vec<FieldViolation>) {
    if value.is_empty() {
        violations.push(FieldViolation::new(
            field,
            "not_empty",
            format!("{field} must not be empty"),
        ));
        return;
    }

    if value.chars().count() > NAME_MAX_LENGTH {
        violations.push(FieldViolation::new(
            field,
            "max_length",
            format!("{field} must not exceed {NAME_MAX_LENGTH} characters"),
        ));
    }
}

fn check_number(field: &'static str, value: f64, violations: &mut Vec<FieldViolation>) {
    // Zero and negative values are accepted; only non-finite input is not
    // a number at all.
    if !value.is_finite() {
        violations.push(FieldViolation::new(
            field,
            "finite",
            format!("{field} must be a finite number"),
        ));
    }
}

fn check_photo(photo: &str, violations: &mut Vec<FieldViolation>) {
    // The empty string is the "no photo" sentinel and always passes.
    if !photo.is_empty() && Url::parse(photo).is_err() {
        violations.push(FieldViolation::new(
            "photo",
            "url",
            "photo must be a well-formed URL",
        ));
    }
}

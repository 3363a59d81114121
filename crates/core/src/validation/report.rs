//! Validation result types and combinators.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Field path, e.g. `title` or `modules[0].lessons[1].title`.
    pub field: String,
    /// Machine-readable rule name, e.g. `length` or `min_price`.
    pub rule: String,
    pub message: String,
}

/// Ordered list of violations produced by one or more validators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors {
    violations: Vec<FieldViolation>,
}

/// Outcome of a validator.
pub type Validation = Result<(), FieldErrors>;

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a single-violation error set.
    pub fn single(
        field: impl Into<String>,
        rule: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let mut errors = Self::new();
        errors.push(field, rule, message);
        errors
    }

    pub fn push(
        &mut self,
        field: impl Into<String>,
        rule: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.violations.push(FieldViolation {
            field: field.into(),
            rule: rule.into(),
            message: message.into(),
        });
    }

    pub fn extend(&mut self, other: FieldErrors) {
        self.violations.extend(other.violations);
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldViolation> {
        self.violations.iter()
    }

    /// Violations attached to exactly `field`.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldViolation> {
        self.violations.iter().filter(move |v| v.field == field)
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.for_field(field).next().is_some()
    }

    /// Distinct field paths carrying at least one violation.
    pub fn fields(&self) -> BTreeSet<&str> {
        self.violations.iter().map(|v| v.field.as_str()).collect()
    }

    /// Drop every violation whose field satisfies `predicate`.
    pub fn remove_where(&mut self, predicate: impl Fn(&str) -> bool) {
        self.violations.retain(|v| !predicate(&v.field));
    }

    /// Prefix every field path, e.g. `title` -> `modules[0].title`.
    pub fn prefixed(mut self, prefix: &str) -> Self {
        for violation in &mut self.violations {
            violation.field = format!("{prefix}.{}", violation.field);
        }
        self
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    pub fn into_validation(self) -> Validation {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", v.field, v.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

impl From<validator::ValidationErrors> for FieldErrors {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        for (field, field_errors) in errors.field_errors() {
            let field = field.to_string();
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"));
                out.push(field.clone(), error.code.to_string(), message);
            }
        }
        // HashMap iteration order is unspecified; keep output stable.
        out.violations.sort_by(|a, b| a.field.cmp(&b.field));
        out
    }
}

/// Run every validator and collect all violations.
pub fn union<I>(outcomes: I) -> Validation
where
    I: IntoIterator<Item = Validation>,
{
    let mut errors = FieldErrors::new();
    for outcome in outcomes {
        if let Err(e) = outcome {
            errors.extend(e);
        }
    }
    errors.into_validation()
}

/// Validator for the `validator` derive constraints of `value`.
pub fn derived<T: validator::Validate>(value: &T) -> Validation {
    value.validate().map_err(FieldErrors::from)
}

/// Fail with a single violation unless `condition` holds.
pub fn ensure(condition: bool, field: &str, rule: &str, message: &str) -> Validation {
    if condition {
        Ok(())
    } else {
        Err(FieldErrors::single(field, rule, message))
    }
}

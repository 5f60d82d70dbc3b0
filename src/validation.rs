//! Input validation for simulation runs.
//!
//! The scheduling engine assumes well-formed input; these checks are the
//! caller-side gate in front of it. Detects:
//! - Duplicate process IDs
//! - Zero burst times (a zero-burst process can never execute down to
//!   exactly zero remaining work, so the engine's behavior on one is
//!   undefined)
//!
//! Negative arrival times and out-of-range queue levels cannot be
//! expressed in the input types, so no dynamic check exists for them.

use std::collections::HashSet;

use crate::models::ProcessSpec;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process requires zero CPU time.
    ZeroBurst,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates process descriptors before a run.
///
/// Checks:
/// 1. No duplicate process IDs
/// 2. Every burst time is at least 1
///
/// An empty list is valid — a run over it produces empty results.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_specs(specs: &[ProcessSpec]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut ids = HashSet::new();
    for spec in specs {
        if !ids.insert(spec.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", spec.id),
            ));
        }

        if spec.burst == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroBurst,
                format!("Process '{}' has zero burst time", spec.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

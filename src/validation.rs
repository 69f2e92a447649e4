//! Input validation for scheduling runs.
//!
//! Checks a process batch and the simulation parameters before any
//! scheduler runs. Detects:
//! - Duplicate process IDs
//! - Negative arrival times
//! - Non-positive burst times
//! - Non-positive Round-Robin quantum
//! - Negative context-switch time
//!
//! Scheduled batches can also be checked after the fact for conservation
//! of the derived metrics (see `scheduler::check_conservation`).
//!
//! Schedulers themselves never fail: a batch either passes validation and
//! runs to completion, or is rejected here.

use std::collections::HashSet;
use std::fmt;

use crate::models::ProcessRecord;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
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
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process has zero or negative burst time.
    NonPositiveBurst,
    /// Round-Robin quantum is zero or negative.
    InvalidQuantum,
    /// Context-switch time is negative.
    NegativeContextSwitch,
    /// Derived metrics of a scheduled process disagree with their definitions.
    Inconsistent,
}

impl ValidationErrorKind {
    /// Whether a batch with this issue can still be simulated.
    ///
    /// Non-positive bursts run as zero-duration processes; everything else
    /// must be rejected.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ValidationErrorKind::NonPositiveBurst)
    }
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a process batch.
///
/// Checks:
/// 1. No duplicate process IDs
/// 2. All arrival times are non-negative
/// 3. All burst times are positive
///
/// An empty batch is valid; every scheduler returns an empty result for it.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_batch(processes: &[ProcessRecord]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process {} has negative arrival time {}",
                    p.id, p.arrival_time
                ),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process {} has non-positive burst time {}",
                    p.id, p.burst_time
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Splits validation errors into fatal ones and recoverable warnings.
pub fn partition_errors(
    errors: Vec<ValidationError>,
) -> (Vec<ValidationError>, Vec<ValidationError>) {
    errors.into_iter().partition(|e| !e.kind.is_recoverable())
}

/// Decides whether a batch may be simulated.
///
/// # Returns
/// `Ok(warnings)` with the recoverable issues (possibly none), or
/// `Err(fatal)` with every issue that forbids a run.
pub fn check_batch(
    processes: &[ProcessRecord],
) -> Result<Vec<ValidationError>, Vec<ValidationError>> {
    let Err(errors) = validate_batch(processes) else {
        return Ok(Vec::new());
    };
    let (fatal, warnings) = partition_errors(errors);
    if fatal.is_empty() {
        Ok(warnings)
    } else {
        Err(fatal)
    }
}

/// Joins errors into a single `; `-separated line.
pub fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

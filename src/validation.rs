//! Input validation for timeline data.
//!
//! Checks structural integrity of printers and jobs before layout.
//! Detects:
//! - Duplicate IDs
//! - Jobs referencing unknown printers
//! - Negative duration estimates
//!
//! Validation is advisory: the layout engine itself tolerates all of
//! these (unknown references route to the unassigned list, negative
//! estimates clamp to zero), but upstream data bugs should be surfaced
//! rather than rendered around silently.

use std::collections::HashSet;

use crate::models::{Job, Printer};

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
    /// Two entities share the same ID.
    DuplicateId,
    /// A job references a printer that doesn't exist.
    UnknownPrinterReference,
    /// A job has a negative duration estimate.
    NegativeEstimate,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates timeline input data.
///
/// Checks:
/// 1. No duplicate printer IDs
/// 2. No duplicate job IDs
/// 3. All assigned jobs reference existing printers
/// 4. All estimates are non-negative
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(printers: &[Printer], jobs: &[Job]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut printer_ids = HashSet::new();
    for p in printers {
        if !printer_ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate printer ID: {}", p.id),
            ));
        }
    }

    let mut job_ids = HashSet::new();
    for job in jobs {
        if !job_ids.insert(job.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate job ID: {}", job.id),
            ));
        }

        if let Some(printer_id) = job.printer_id.as_deref() {
            if !printer_ids.contains(printer_id) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownPrinterReference,
                    format!("Job '{}' references unknown printer '{printer_id}'", job.id),
                ));
            }
        }

        if job.estimated_minutes < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeEstimate,
                format!(
                    "Job '{}' has negative estimate ({} min)",
                    job.id, job.estimated_minutes
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

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_printers() -> Vec<Printer> {
        vec![
            Printer::new("P1").with_name("Prusa MK4"),
            Printer::new("P2").with_name("Voron 2.4"),
        ]
    }

    fn sample_jobs() -> Vec<Job> {
        vec![
            Job::new("J1").with_printer("P1").with_estimate(120),
            Job::new("J2").with_printer("P2").with_estimate(60),
            Job::new("J3").with_estimate(30), // unassigned is fine
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample_printers(), &sample_jobs()).is_ok());
    }

    #[test]
    fn test_duplicate_printer_id() {
        let printers = vec![Printer::new("P1"), Printer::new("P1")];
        let errors = validate_input(&printers, &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("printer")));
    }

    #[test]
    fn test_duplicate_job_id() {
        let jobs = vec![Job::new("J1"), Job::new("J1")];
        let errors = validate_input(&sample_printers(), &jobs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("job")));
    }

    #[test]
    fn test_unknown_printer_reference() {
        let jobs = vec![Job::new("J1").with_printer("GHOST")];
        let errors = validate_input(&sample_printers(), &jobs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownPrinterReference));
    }

    #[test]
    fn test_negative_estimate() {
        let jobs = vec![Job::new("J1").with_printer("P1").with_estimate(-5)];
        let errors = validate_input(&sample_printers(), &jobs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeEstimate));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let printers = vec![Printer::new("P1"), Printer::new("P1")];
        let jobs = vec![Job::new("J1").with_printer("GHOST").with_estimate(-1)];
        let errors = validate_input(&printers, &jobs).unwrap_err();
        assert!(errors.len() >= 3);
    }

    #[test]
    fn test_empty_input_is_valid() {
        assert!(validate_input(&[], &[]).is_ok());
    }
}

//! Input validation for timetabling problems.
//!
//! Checks structural integrity of a problem definition before any
//! solve. Detects:
//! - Empty catalogs
//! - Duplicate catalog entries
//! - Teachers with no capability
//! - Capability/quota entries referencing unknown teachers or subjects
//! - Zero quotas
//! - Quota totals exceeding the slot capacity
//!
//! These are configuration errors, caught eagerly at construction time.
//! A well-formed but unsatisfiable problem is not a validation failure;
//! the solver reports it as exhausted.

use crate::models::TimetableProblem;
use std::collections::HashSet;

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
    /// A catalog (days, periods, subjects, teachers, classrooms) is empty.
    EmptyCatalog,
    /// Two entries in the same catalog share a name.
    DuplicateId,
    /// A teacher has no subjects they are qualified to teach.
    EmptyCapability,
    /// A capability or quota entry names an unknown teacher or subject.
    UnknownReference,
    /// A subject has an explicit quota of zero.
    InvalidQuota,
    /// The quota total exceeds the number of available slots.
    QuotaExceedsCapacity,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a problem definition.
///
/// Checks:
/// 1. All five catalogs are non-empty
/// 2. No duplicate entries within a catalog
/// 3. Every teacher has at least one capability
/// 4. Capability entries reference cataloged teachers and subjects
/// 5. Quota entries reference cataloged subjects
/// 6. No explicit zero quota
/// 7. The quota total fits within days × periods
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_problem(problem: &TimetableProblem) -> ValidationResult {
    let mut errors = Vec::new();

    let catalogs: [(&str, &[String]); 5] = [
        ("days", &problem.days),
        ("periods", &problem.periods),
        ("subjects", &problem.subjects),
        ("teachers", &problem.teachers),
        ("classrooms", &problem.classrooms),
    ];

    for (name, entries) in catalogs {
        if entries.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyCatalog,
                format!("Catalog '{name}' is empty"),
            ));
        }

        let mut seen = HashSet::new();
        for entry in entries {
            if !seen.insert(entry.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!("Duplicate entry '{entry}' in catalog '{name}'"),
                ));
            }
        }
    }

    let subject_set: HashSet<&str> = problem.subjects.iter().map(|s| s.as_str()).collect();
    let teacher_set: HashSet<&str> = problem.teachers.iter().map(|t| t.as_str()).collect();

    // Capability relation
    for teacher in &problem.teachers {
        let capable = problem
            .capabilities
            .get(teacher)
            .is_some_and(|subjects| !subjects.is_empty());
        if !capable {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyCapability,
                format!("Teacher '{teacher}' has an empty capability set"),
            ));
        }
    }

    for (teacher, subjects) in &problem.capabilities {
        if !teacher_set.contains(teacher.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownReference,
                format!("Capability entry for unknown teacher '{teacher}'"),
            ));
        }
        for subject in subjects {
            if !subject_set.contains(subject.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownReference,
                    format!("Teacher '{teacher}' is declared capable of unknown subject '{subject}'"),
                ));
            }
        }
    }

    // Quota map
    for (subject, &required) in &problem.quotas {
        if !subject_set.contains(subject.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownReference,
                format!("Quota entry for unknown subject '{subject}'"),
            ));
        }
        if required == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidQuota,
                format!("Subject '{subject}' has a quota of zero"),
            ));
        }
    }

    let capacity = problem.slot_count() as u32;
    let required = problem.total_required();
    if required > capacity {
        errors.push(ValidationError::new(
            ValidationErrorKind::QuotaExceedsCapacity,
            format!("Quota total {required} exceeds slot capacity {capacity}"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

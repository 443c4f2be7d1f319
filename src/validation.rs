//! Input validation for timetabling problems.
//!
//! Checks structural integrity of enrollment data before graph
//! construction. Detects:
//! - Duplicate or empty course/student identifiers
//! - Matrix row count inconsistent with the student roster
//! - Matrix rows inconsistent with the course roster
//!
//! `Enrollment` maintains these invariants by construction; this module
//! covers externally assembled data.

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
    /// Two courses or two students share the same ID.
    DuplicateId,
    /// A course or student ID is empty.
    EmptyId,
    /// The matrix row count differs from the student count.
    RowCountMismatch,
    /// A matrix row's width differs from the course count.
    RowWidthMismatch,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates enrollment data for a timetabling problem.
///
/// Checks:
/// 1. No duplicate or empty course IDs
/// 2. No duplicate or empty student IDs
/// 3. Matrix has exactly one row per student
/// 4. Every row has exactly one column per course
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_enrollment(
    courses: &[String],
    students: &[String],
    matrix: &[Vec<bool>],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut course_ids = HashSet::new();
    for c in courses {
        if c.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                "Empty course ID",
            ));
        } else if !course_ids.insert(c.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course ID: {c}"),
            ));
        }
    }

    let mut student_ids = HashSet::new();
    for s in students {
        if s.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                "Empty student ID",
            ));
        } else if !student_ids.insert(s.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate student ID: {s}"),
            ));
        }
    }

    if matrix.len() != students.len() {
        errors.push(ValidationError::new(
            ValidationErrorKind::RowCountMismatch,
            format!(
                "Enrollment matrix has {} rows for {} students",
                matrix.len(),
                students.len()
            ),
        ));
    }

    for (row, cells) in matrix.iter().enumerate() {
        if cells.len() != courses.len() {
            let who = students
                .get(row)
                .map(String::as_str)
                .unwrap_or("<out of roster>");
            errors.push(ValidationError::new(
                ValidationErrorKind::RowWidthMismatch,
                format!(
                    "Row {} ({}) has {} columns for {} courses",
                    row,
                    who,
                    cells.len(),
                    courses.len()
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

    fn ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_valid_input() {
        let courses = ids(&["Math", "Physics"]);
        let students = ids(&["S1", "S2"]);
        let matrix = vec![vec![true, false], vec![false, true]];
        assert!(validate_enrollment(&courses, &students, &matrix).is_ok());
    }

    #[test]
    fn test_empty_input_is_valid() {
        assert!(validate_enrollment(&[], &[], &[]).is_ok());
    }

    #[test]
    fn test_duplicate_course_id() {
        let courses = ids(&["Math", "Math"]);
        let errors = validate_enrollment(&courses, &[], &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("course")));
    }

    #[test]
    fn test_duplicate_student_id() {
        let students = ids(&["S1", "S1"]);
        let matrix = vec![vec![], vec![]];
        let errors = validate_enrollment(&[], &students, &matrix).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("student")));
    }

    #[test]
    fn test_empty_id() {
        let courses = ids(&["Math", ""]);
        let errors = validate_enrollment(&courses, &[], &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyId));
    }

    #[test]
    fn test_row_count_mismatch() {
        let courses = ids(&["Math"]);
        let students = ids(&["S1", "S2"]);
        let matrix = vec![vec![true]];
        let errors = validate_enrollment(&courses, &students, &matrix).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::RowCountMismatch));
    }

    #[test]
    fn test_row_width_mismatch() {
        let courses = ids(&["Math", "Physics"]);
        let students = ids(&["S1"]);
        let matrix = vec![vec![true]];
        let errors = validate_enrollment(&courses, &students, &matrix).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::RowWidthMismatch && e.message.contains("S1")));
    }

    #[test]
    fn test_multiple_errors() {
        // Duplicate course + ragged row
        let courses = ids(&["Math", "Math"]);
        let students = ids(&["S1"]);
        let matrix = vec![vec![true]];
        let errors = validate_enrollment(&courses, &students, &matrix).unwrap_err();
        assert!(errors.len() >= 2);
    }
}

//! Enrollment relation model.
//!
//! Owns the ordered course and student rosters together with the boolean
//! enrollment matrix. The matrix invariant — one row per student, one column
//! per course — is maintained under every mutation: adding a course appends
//! a `false` column to every existing row, adding a student appends a new
//! all-`false` row.

use serde::{Deserialize, Serialize};

use crate::graph::ConflictGraph;

/// Enrollment data: which students take which courses.
///
/// Courses and students keep their insertion order. The conflict graph's
/// node order and the colorer's tie-breaking both depend on it, so identical
/// input sequences always produce identical timetables.
///
/// # Example
///
/// ```
/// use u_timetable::models::Enrollment;
///
/// let mut enrollment = Enrollment::new();
/// enrollment.add_course("Math");
/// enrollment.add_course("Physics");
/// enrollment.add_student("S1");
/// enrollment.set_enrolled("S1", "Math", true);
///
/// assert!(enrollment.is_enrolled("S1", "Math"));
/// assert!(!enrollment.is_enrolled("S1", "Physics"));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Enrollment {
    /// Course identifiers, in insertion order.
    courses: Vec<String>,
    /// Student identifiers, in insertion order.
    students: Vec<String>,
    /// `matrix[student][course]` — `true` when the student takes the course.
    matrix: Vec<Vec<bool>>,
}

impl Enrollment {
    /// Creates an empty enrollment relation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a course, appending a `false` column to every student row.
    ///
    /// Empty or duplicate identifiers are ignored. Returns whether the
    /// course was added.
    pub fn add_course(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if id.is_empty() || self.courses.contains(&id) {
            return false;
        }
        self.courses.push(id);
        for row in &mut self.matrix {
            row.push(false);
        }
        true
    }

    /// Adds a student, appending a new all-`false` row.
    ///
    /// Empty or duplicate identifiers are ignored. Returns whether the
    /// student was added.
    pub fn add_student(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if id.is_empty() || self.students.contains(&id) {
            return false;
        }
        self.students.push(id);
        self.matrix.push(vec![false; self.courses.len()]);
        true
    }

    /// Adds a course (builder form).
    pub fn with_course(mut self, id: impl Into<String>) -> Self {
        self.add_course(id);
        self
    }

    /// Adds a student (builder form).
    pub fn with_student(mut self, id: impl Into<String>) -> Self {
        self.add_student(id);
        self
    }

    /// Enrolls a student in a course (builder form).
    pub fn with_enrolled(mut self, student: &str, course: &str) -> Self {
        self.set_enrolled(student, course, true);
        self
    }

    /// Sets the enrollment state for a (student, course) pair.
    ///
    /// Unknown identifiers are a no-op. Returns whether the cell was set.
    pub fn set_enrolled(&mut self, student: &str, course: &str, enrolled: bool) -> bool {
        match (self.student_index(student), self.course_index(course)) {
            (Some(row), Some(col)) => {
                self.matrix[row][col] = enrolled;
                true
            }
            _ => false,
        }
    }

    /// Flips the enrollment state for a (student, course) pair.
    ///
    /// Returns the new state, or `None` for unknown identifiers.
    pub fn toggle_enrolled(&mut self, student: &str, course: &str) -> Option<bool> {
        let row = self.student_index(student)?;
        let col = self.course_index(course)?;
        self.matrix[row][col] = !self.matrix[row][col];
        Some(self.matrix[row][col])
    }

    /// Whether the student is enrolled in the course.
    ///
    /// Unknown identifiers read as not enrolled.
    pub fn is_enrolled(&self, student: &str, course: &str) -> bool {
        match (self.student_index(student), self.course_index(course)) {
            (Some(row), Some(col)) => self.matrix[row][col],
            _ => false,
        }
    }

    /// Course identifiers in insertion order.
    pub fn courses(&self) -> &[String] {
        &self.courses
    }

    /// Student identifiers in insertion order.
    pub fn students(&self) -> &[String] {
        &self.students
    }

    /// The enrollment matrix, one row per student.
    pub fn matrix(&self) -> &[Vec<bool>] {
        &self.matrix
    }

    /// Column index of a course.
    pub fn course_index(&self, id: &str) -> Option<usize> {
        self.courses.iter().position(|c| c == id)
    }

    /// Row index of a student.
    pub fn student_index(&self, id: &str) -> Option<usize> {
        self.students.iter().position(|s| s == id)
    }

    /// Number of courses.
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Number of students.
    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// Courses a student is enrolled in, in course insertion order.
    pub fn courses_for_student(&self, student: &str) -> Vec<&str> {
        match self.student_index(student) {
            Some(row) => self
                .courses
                .iter()
                .enumerate()
                .filter(|&(col, _)| self.matrix[row][col])
                .map(|(_, id)| id.as_str())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Rebuilds the conflict graph from the current enrollment state.
    ///
    /// The graph is a derived view, recomputed wholesale on each call.
    /// The matrix invariant holds by construction, so this rebuild cannot
    /// fail on dimensions.
    pub fn conflict_graph(&self) -> ConflictGraph {
        ConflictGraph::from_rows(&self.courses, &self.matrix)
    }
}

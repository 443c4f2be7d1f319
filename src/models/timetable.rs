//! Timetable (solution) model.
//!
//! A timetable is a complete assignment of courses to time slots. Slots are
//! non-negative indices; display is 1-based. A timetable is proper when no
//! two conflicting courses share a slot.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::graph::ConflictGraph;

/// A complete timetable (solution to a timetabling problem).
///
/// Assignments are listed in course insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timetable {
    /// Course → slot assignments.
    pub assignments: Vec<SlotAssignment>,
}

/// A course-to-slot assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAssignment {
    /// Assigned course identifier.
    pub course_id: String,
    /// Assigned time slot (0-indexed).
    pub slot: usize,
}

impl SlotAssignment {
    /// Creates a new assignment.
    pub fn new(course_id: impl Into<String>, slot: usize) -> Self {
        Self {
            course_id: course_id.into(),
            slot,
        }
    }
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an assignment.
    pub fn add_assignment(&mut self, assignment: SlotAssignment) {
        self.assignments.push(assignment);
    }

    /// Finds the slot assigned to a course.
    pub fn slot_for_course(&self, course_id: &str) -> Option<usize> {
        self.assignments
            .iter()
            .find(|a| a.course_id == course_id)
            .map(|a| a.slot)
    }

    /// Courses assigned to a given slot, in assignment order.
    pub fn courses_in_slot(&self, slot: usize) -> Vec<&str> {
        self.assignments
            .iter()
            .filter(|a| a.slot == slot)
            .map(|a| a.course_id.as_str())
            .collect()
    }

    /// Number of distinct slots used.
    pub fn slot_count(&self) -> usize {
        self.assignments
            .iter()
            .map(|a| a.slot)
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Number of assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the timetable has no assignments.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Whether this timetable is a proper coloring of the given graph.
    ///
    /// Every course in the graph must be assigned a slot, and no two
    /// conflicting courses may share one.
    pub fn is_proper(&self, graph: &ConflictGraph) -> bool {
        let slots: Vec<Option<usize>> = graph
            .course_ids()
            .iter()
            .map(|id| self.slot_for_course(id))
            .collect();

        if slots.iter().any(|s| s.is_none()) {
            return false;
        }
        graph
            .edges()
            .iter()
            .all(|&(i, j)| slots[i] != slots[j])
    }

    /// Human-readable slot report, one line per course, 1-based display.
    ///
    /// # Example
    ///
    /// ```
    /// use u_timetable::models::{SlotAssignment, Timetable};
    ///
    /// let mut timetable = Timetable::new();
    /// timetable.add_assignment(SlotAssignment::new("Math", 0));
    /// assert_eq!(timetable.report(), "Course: Math, Time Slot: 1");
    /// ```
    pub fn report(&self) -> String {
        self.assignments
            .iter()
            .map(|a| format!("Course: {}, Time Slot: {}", a.course_id, a.slot + 1))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

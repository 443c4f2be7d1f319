//! Timetable quality metrics (KPIs).
//!
//! Computes standard timetabling indicators from a computed slot assignment
//! and its conflict graph.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Slot Count | Distinct slots used |
//! | Conflict Count | Edges in the conflict graph |
//! | Max Degree | Largest number of conflicts for one course |
//! | Slot Load | Courses assigned per slot |
//! | Proper | No conflicting pair shares a slot |

use std::collections::HashMap;

use crate::graph::ConflictGraph;
use crate::models::Timetable;

/// Timetable performance indicators.
#[derive(Debug, Clone)]
pub struct TimetableKpi {
    /// Number of courses assigned.
    pub course_count: usize,
    /// Number of conflict edges in the graph.
    pub conflict_count: usize,
    /// Distinct slots used.
    pub slot_count: usize,
    /// Maximum node degree in the graph.
    pub max_degree: usize,
    /// Courses assigned per slot.
    pub courses_per_slot: HashMap<usize, usize>,
    /// Mean courses per used slot (0.0 when no slots are used).
    pub avg_slot_load: f64,
    /// Whether the assignment is a proper coloring of the graph.
    pub proper: bool,
}

impl TimetableKpi {
    /// Computes KPIs from a timetable and its conflict graph.
    pub fn calculate(timetable: &Timetable, graph: &ConflictGraph) -> Self {
        let mut courses_per_slot: HashMap<usize, usize> = HashMap::new();
        for assignment in &timetable.assignments {
            *courses_per_slot.entry(assignment.slot).or_insert(0) += 1;
        }

        let slot_count = courses_per_slot.len();
        let course_count = timetable.assignment_count();
        let avg_slot_load = if slot_count == 0 {
            0.0
        } else {
            course_count as f64 / slot_count as f64
        };

        Self {
            course_count,
            conflict_count: graph.edge_count(),
            slot_count,
            max_degree: graph.max_degree(),
            courses_per_slot,
            avg_slot_load,
            proper: timetable.is_proper(graph),
        }
    }

    /// Whether the slot count respects the greedy bound (max degree + 1).
    pub fn within_greedy_bound(&self) -> bool {
        self.slot_count <= self.max_degree + 1
    }
}

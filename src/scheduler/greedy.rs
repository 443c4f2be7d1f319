//! Degree-ordered greedy slot assignment.
//!
//! # Algorithm
//!
//! 1. Order nodes by descending degree; equal degrees keep course insertion
//!    order (stable sort), so identical inputs always produce identical
//!    timetables.
//! 2. Process nodes in that order, collecting the slots of already-assigned
//!    neighbors.
//! 3. Assign the smallest non-negative slot not taken by a neighbor
//!    (first-fit).
//!
//! The result is always a proper coloring; the slot count is bounded by
//! (maximum degree + 1) but not guaranteed minimal.
//!
//! # Reference
//! Welsh & Powell (1967), "An upper bound for the chromatic number of a
//! graph and its application to timetabling problems"

use std::collections::BTreeSet;

use crate::graph::ConflictGraph;
use crate::models::{SlotAssignment, Timetable};

/// Processing order for the greedy pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VertexOrder {
    /// Descending degree; equal degrees keep course insertion order.
    #[default]
    DegreeDescending,
    /// Course insertion order as-is.
    Insertion,
}

/// Greedy first-fit slot assigner.
///
/// A pure function of the graph's node and edge structure: no side effects,
/// no internal state beyond the configured processing order.
///
/// # Example
///
/// ```
/// use u_timetable::models::Enrollment;
/// use u_timetable::scheduler::GreedyColorer;
///
/// let enrollment = Enrollment::new()
///     .with_course("Math")
///     .with_course("Physics")
///     .with_student("S1")
///     .with_enrolled("S1", "Math")
///     .with_enrolled("S1", "Physics");
///
/// let graph = enrollment.conflict_graph();
/// let timetable = GreedyColorer::new().color(&graph);
///
/// assert_eq!(timetable.slot_for_course("Math"), Some(0));
/// assert_eq!(timetable.slot_for_course("Physics"), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct GreedyColorer {
    order: VertexOrder,
}

impl GreedyColorer {
    /// Creates a colorer with the default degree-descending order.
    pub fn new() -> Self {
        Self {
            order: VertexOrder::DegreeDescending,
        }
    }

    /// Sets the processing order.
    pub fn with_order(mut self, order: VertexOrder) -> Self {
        self.order = order;
        self
    }

    /// Computes a proper slot assignment for the graph.
    ///
    /// An empty graph yields an empty timetable — a valid, non-error
    /// result. Assignments are listed in course insertion order regardless
    /// of processing order.
    pub fn color(&self, graph: &ConflictGraph) -> Timetable {
        let mut slots: Vec<Option<usize>> = vec![None; graph.node_count()];

        for &node in &self.vertex_order(graph) {
            let taken: BTreeSet<usize> = graph
                .neighbors(node)
                .filter_map(|neighbor| slots[neighbor])
                .collect();

            let mut slot = 0;
            while taken.contains(&slot) {
                slot += 1;
            }
            slots[node] = Some(slot);
        }

        let mut timetable = Timetable::new();
        for (node, slot) in slots.into_iter().enumerate() {
            if let (Some(id), Some(slot)) = (graph.course_id(node), slot) {
                timetable.add_assignment(SlotAssignment::new(id, slot));
            }
        }
        timetable
    }

    /// Returns node indices in processing order.
    fn vertex_order(&self, graph: &ConflictGraph) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..graph.node_count()).collect();
        if self.order == VertexOrder::DegreeDescending {
            // Stable sort: equal degrees keep insertion order.
            indices.sort_by(|&a, &b| graph.degree(b).cmp(&graph.degree(a)));
        }
        indices
    }
}

impl Default for GreedyColorer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_with(courses: &[&str], conflicts: &[(&str, &str)]) -> ConflictGraph {
        let mut graph = ConflictGraph::with_courses(courses.iter().copied());
        for &(a, b) in conflicts {
            graph.add_conflict(a, b);
        }
        graph
    }

    #[test]
    fn test_no_conflicts_all_share_slot_zero() {
        let graph = graph_with(&["A", "B", "C"], &[]);
        let timetable = GreedyColorer::new().color(&graph);

        assert_eq!(timetable.slot_for_course("A"), Some(0));
        assert_eq!(timetable.slot_for_course("B"), Some(0));
        assert_eq!(timetable.slot_for_course("C"), Some(0));
        assert_eq!(timetable.slot_count(), 1);
    }

    #[test]
    fn test_single_conflict_first_added_wins_tie() {
        let graph = graph_with(&["A", "B"], &[("A", "B")]);
        let timetable = GreedyColorer::new().color(&graph);

        // Equal degree: A was added first, so A is processed first.
        assert_eq!(timetable.slot_for_course("A"), Some(0));
        assert_eq!(timetable.slot_for_course("B"), Some(1));
    }

    #[test]
    fn test_path_graph_center_first() {
        let graph = graph_with(&["A", "B", "C"], &[("A", "B"), ("B", "C")]);
        let timetable = GreedyColorer::new().color(&graph);

        // B has degree 2 and is processed first; A and C both avoid only B.
        assert_eq!(timetable.slot_for_course("B"), Some(0));
        assert_eq!(timetable.slot_for_course("A"), Some(1));
        assert_eq!(timetable.slot_for_course("C"), Some(1));
        assert_eq!(timetable.slot_count(), 2);
    }

    #[test]
    fn test_complete_graph_uses_three_slots() {
        let graph = graph_with(&["A", "B", "C"], &[("A", "B"), ("A", "C"), ("B", "C")]);
        let timetable = GreedyColorer::new().color(&graph);

        assert_eq!(timetable.slot_count(), 3);
        assert!(timetable.is_proper(&graph));
        // Equal degrees throughout: insertion order decides.
        assert_eq!(timetable.slot_for_course("A"), Some(0));
        assert_eq!(timetable.slot_for_course("B"), Some(1));
        assert_eq!(timetable.slot_for_course("C"), Some(2));
    }

    #[test]
    fn test_empty_graph_yields_empty_timetable() {
        let timetable = GreedyColorer::new().color(&ConflictGraph::new());
        assert!(timetable.is_empty());
        assert_eq!(timetable.slot_count(), 0);
    }

    #[test]
    fn test_isolated_node_gets_slot_zero() {
        let graph = graph_with(&["Hub", "A", "B", "Solo"], &[("Hub", "A"), ("Hub", "B")]);
        let timetable = GreedyColorer::new().color(&graph);

        assert_eq!(timetable.slot_for_course("Hub"), Some(0));
        assert_eq!(timetable.slot_for_course("Solo"), Some(0));
        assert!(timetable.is_proper(&graph));
    }

    #[test]
    fn test_coloring_is_proper() {
        // Wheel-ish graph with a dense center
        let graph = graph_with(
            &["A", "B", "C", "D", "E"],
            &[
                ("A", "B"),
                ("A", "C"),
                ("A", "D"),
                ("A", "E"),
                ("B", "C"),
                ("C", "D"),
                ("D", "E"),
            ],
        );
        let timetable = GreedyColorer::new().color(&graph);
        assert!(timetable.is_proper(&graph));
    }

    #[test]
    fn test_slot_count_within_greedy_bound() {
        let graph = graph_with(
            &["A", "B", "C", "D", "E"],
            &[("A", "B"), ("A", "C"), ("A", "D"), ("B", "C")],
        );
        let timetable = GreedyColorer::new().color(&graph);
        assert!(timetable.slot_count() <= graph.max_degree() + 1);
    }

    #[test]
    fn test_coloring_is_deterministic() {
        let graph = graph_with(
            &["A", "B", "C", "D"],
            &[("A", "B"), ("B", "C"), ("C", "D"), ("D", "A")],
        );
        let colorer = GreedyColorer::new();

        let first = colorer.color(&graph);
        let second = colorer.color(&graph);
        assert_eq!(first.assignments, second.assignments);
    }

    #[test]
    fn test_assignments_in_insertion_order() {
        let graph = graph_with(&["C", "A", "B"], &[("C", "A")]);
        let timetable = GreedyColorer::new().color(&graph);

        let order: Vec<&str> = timetable
            .assignments
            .iter()
            .map(|a| a.course_id.as_str())
            .collect();
        assert_eq!(order, ["C", "A", "B"]);
    }

    #[test]
    fn test_insertion_order_variant() {
        let graph = graph_with(&["A", "B", "C"], &[("A", "B"), ("B", "C")]);
        let timetable = GreedyColorer::new()
            .with_order(VertexOrder::Insertion)
            .color(&graph);

        // Plain first-fit in course order: A gets 0, B avoids A, C avoids B.
        assert_eq!(timetable.slot_for_course("A"), Some(0));
        assert_eq!(timetable.slot_for_course("B"), Some(1));
        assert_eq!(timetable.slot_for_course("C"), Some(0));
        assert!(timetable.is_proper(&graph));
    }
}

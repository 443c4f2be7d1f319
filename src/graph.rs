//! Conflict graph construction.
//!
//! A conflict graph has one node per course and an edge between every pair
//! of courses that share at least one enrolled student. It is an undirected
//! simple graph: no self-loops, no multi-edges. The graph is a derived view
//! of the enrollment relation, rebuilt wholesale on demand.
//!
//! # Algorithm
//!
//! For every unordered pair of distinct courses, scan student rows until one
//! is enrolled in both; a single witness adds the edge and ends the scan for
//! that pair. O(C² · S) for C courses and S students — acceptable for a
//! batch rebuild.
//!
//! # Reference
//! Welsh & Powell (1967), "An upper bound for the chromatic number of a
//! graph and its application to timetabling problems"

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::validation::{ValidationError, ValidationErrorKind};

/// An undirected simple graph of course conflicts.
///
/// Nodes keep course insertion order; neighbor sets iterate in ascending
/// node order. Both orders are load-bearing for deterministic coloring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictGraph {
    /// Course identifiers, in insertion order.
    courses: Vec<String>,
    /// Per-node neighbor sets, indexed like `courses`.
    adjacency: Vec<BTreeSet<usize>>,
}

impl ConflictGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with the given courses and no conflicts.
    pub fn with_courses<I, S>(courses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut graph = Self::new();
        for course in courses {
            graph.add_course(course);
        }
        graph
    }

    /// Adds an isolated course node.
    ///
    /// Empty or duplicate identifiers are ignored. Returns whether the
    /// course was added.
    pub fn add_course(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if id.is_empty() || self.courses.contains(&id) {
            return false;
        }
        self.courses.push(id);
        self.adjacency.push(BTreeSet::new());
        true
    }

    /// Adds a conflict edge between two courses.
    ///
    /// Self-loops and unknown identifiers are ignored. Returns whether a
    /// new edge was added.
    pub fn add_conflict(&mut self, a: &str, b: &str) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(i), Some(j)) if i != j => {
                let added = self.adjacency[i].insert(j);
                self.adjacency[j].insert(i);
                added
            }
            _ => false,
        }
    }

    /// Course identifiers in insertion order.
    pub fn course_ids(&self) -> &[String] {
        &self.courses
    }

    /// The course at a node index.
    pub fn course_id(&self, index: usize) -> Option<&str> {
        self.courses.get(index).map(String::as_str)
    }

    /// Node index of a course.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.courses.iter().position(|c| c == id)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.courses.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Degree of a node (number of conflicting courses).
    pub fn degree(&self, index: usize) -> usize {
        self.adjacency.get(index).map(BTreeSet::len).unwrap_or(0)
    }

    /// Maximum node degree (0 for an empty graph).
    pub fn max_degree(&self) -> usize {
        self.adjacency.iter().map(BTreeSet::len).max().unwrap_or(0)
    }

    /// Neighbor node indices, in ascending order.
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency.get(index).into_iter().flatten().copied()
    }

    /// Whether two courses conflict.
    pub fn has_conflict(&self, a: &str, b: &str) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(i), Some(j)) => self.adjacency[i].contains(&j),
            _ => false,
        }
    }

    /// All edges as (i, j) node-index pairs with i < j, in ascending order.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for (i, neighbors) in self.adjacency.iter().enumerate() {
            edges.extend(neighbors.range(i + 1..).map(|&j| (i, j)));
        }
        edges
    }

    /// Builds a graph from course identifiers and rectangular student rows.
    ///
    /// Callers guarantee every row has one column per course; `Enrollment`
    /// holds that invariant by construction, `build_conflict_graph` checks
    /// it first.
    pub(crate) fn from_rows(courses: &[String], rows: &[Vec<bool>]) -> Self {
        let mut graph = Self {
            courses: courses.to_vec(),
            adjacency: vec![BTreeSet::new(); courses.len()],
        };
        for i in 0..courses.len() {
            for j in (i + 1)..courses.len() {
                // One witnessing student suffices; `any` stops at the first.
                if rows.iter().any(|row| row[i] && row[j]) {
                    graph.adjacency[i].insert(j);
                    graph.adjacency[j].insert(i);
                }
            }
        }
        graph
    }
}

/// Derives the conflict graph from an enrollment relation.
///
/// The matrix must have one row per student and one column per course;
/// a mismatch is a contract violation surfaced immediately as a
/// [`ValidationError`], never retried.
///
/// # Example
///
/// ```
/// use u_timetable::graph::build_conflict_graph;
///
/// let courses = vec!["Math".to_string(), "Physics".to_string()];
/// let students = vec!["S1".to_string()];
/// let enrollment = vec![vec![true, true]];
///
/// let graph = build_conflict_graph(&courses, &students, &enrollment).unwrap();
/// assert!(graph.has_conflict("Math", "Physics"));
/// ```
pub fn build_conflict_graph(
    courses: &[String],
    students: &[String],
    enrollment: &[Vec<bool>],
) -> Result<ConflictGraph, ValidationError> {
    if enrollment.len() != students.len() {
        return Err(ValidationError::new(
            ValidationErrorKind::RowCountMismatch,
            format!(
                "Enrollment matrix has {} rows for {} students",
                enrollment.len(),
                students.len()
            ),
        ));
    }
    for (row, cells) in enrollment.iter().enumerate() {
        if cells.len() != courses.len() {
            return Err(ValidationError::new(
                ValidationErrorKind::RowWidthMismatch,
                format!(
                    "Row {} has {} columns for {} courses",
                    row,
                    cells.len(),
                    courses.len()
                ),
            ));
        }
    }
    Ok(ConflictGraph::from_rows(courses, enrollment))
}

//! Greedy slot assignment and timetable quality metrics.
//!
//! # Algorithm
//!
//! `GreedyColorer` uses a degree-ordered, first-fit greedy coloring
//! (Welsh–Powell style). It is not optimal, but it is deterministic, fast,
//! and never exceeds (maximum degree + 1) slots.
//!
//! # KPI
//!
//! `TimetableKpi` computes timetable quality metrics: slot count, conflict
//! count, maximum degree, per-slot load, and the greedy bound check.
//!
//! # References
//!
//! - Welsh & Powell (1967), "An upper bound for the chromatic number of a
//!   graph and its application to timetabling problems"
//! - Husfeldt (2015), "Graph colouring algorithms", Ch. 13 of "Topics in
//!   Chromatic Graph Theory"

mod greedy;
mod kpi;

pub use greedy::{GreedyColorer, VertexOrder};
pub use kpi::TimetableKpi;

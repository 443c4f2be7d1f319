//! Timetabling domain models.
//!
//! Provides the core data types for representing enrollment data and
//! computed timetables. Domain-agnostic within timetabling — applicable to
//! course scheduling, exam sessions, and conference tracks alike.
//!
//! # Domain Mappings
//!
//! | u-timetable | University | Exam Session | Conference |
//! |-------------|-----------|--------------|------------|
//! | Course | Course | Exam | Talk |
//! | Student | Student | Candidate | Attendee |
//! | Slot | Lecture hour | Exam period | Session |

mod enrollment;
mod timetable;

pub use enrollment::Enrollment;
pub use timetable::{SlotAssignment, Timetable};

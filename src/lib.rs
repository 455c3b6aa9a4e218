//! Timetabling framework for the U-Engine ecosystem.
//!
//! Builds weekly timetables by constraint satisfaction: activities
//! (subject, teacher, classroom) are bound to slots (day, period) under
//! teacher-capability, slot-exclusivity, and per-subject quota
//! constraints, using chronological backtracking with randomized value
//! ordering.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `TimetableProblem`, `Slot`,
//!   `Activity`, `Timetable`
//! - **`validation`**: Construction-time configuration checks
//! - **`solver`**: Backtracking search and dynamic domain evaluation
//! - **`report`**: Read-only quota progress reporting
//!
//! # Usage
//!
//! The crate is a pure in-memory engine: the caller supplies a fully
//! formed `TimetableProblem` and owns all input handling and
//! presentation. A solve either produces a complete timetable meeting
//! every quota exactly or reports that none exists.
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Russell & Norvig (2020), "Artificial Intelligence: A Modern
//!   Approach", Ch. 6: Constraint Satisfaction Problems

pub mod models;
pub mod report;
pub mod solver;
pub mod validation;

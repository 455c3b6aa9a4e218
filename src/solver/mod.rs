//! Backtracking solver for timetabling problems.
//!
//! The solver explores the slot space depth-first, binding one legal
//! activity per step and undoing the binding when a branch cannot reach
//! a complete timetable. Search is single-threaded and synchronous; one
//! in-flight solve exclusively owns its timetable.

mod backtrack;
mod domain;

pub use backtrack::BacktrackSolver;
pub use domain::{is_legal, legal_candidates};

use crate::models::Timetable;

/// Status of the solver after execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// A complete timetable meeting every quota exactly was found.
    Solved,
    /// No legal assignment satisfies all quotas; the search space was
    /// fully explored or the problem is provably infeasible. A normal,
    /// reportable outcome, not an error.
    Exhausted,
    /// The configured time limit expired before the search finished.
    /// Distinct from [`Exhausted`]: nothing was proven.
    ///
    /// [`Exhausted`]: SolveStatus::Exhausted
    Aborted,
}

/// Result of a solve.
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Solver status.
    pub status: SolveStatus,
    /// The complete timetable, present only on [`SolveStatus::Solved`].
    /// No partial assignment is surfaced on other outcomes.
    pub timetable: Option<Timetable>,
    /// Search effort counters.
    pub stats: SearchStats,
}

impl SolveResult {
    /// Whether a complete timetable was found.
    pub fn is_solved(&self) -> bool {
        self.status == SolveStatus::Solved
    }
}

/// Ordering policy applied to each candidate set before iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueOrdering {
    /// Unbiased shuffle from the injected RNG (the reference policy).
    /// Different runs may find different, equally valid timetables.
    #[default]
    Shuffled,
    /// Catalog order: subject, then teacher, then classroom.
    /// Deterministic across runs; the RNG is not consulted.
    Lexicographic,
}

/// Solver configuration.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Candidate ordering policy.
    pub value_ordering: ValueOrdering,
    /// Maximum solve time in milliseconds. `None` runs to completion or
    /// exhaustion. The limit is checked once per candidate trial.
    pub time_limit_ms: Option<i64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            value_ordering: ValueOrdering::Shuffled,
            time_limit_ms: None,
        }
    }
}

/// Search effort counters.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    /// Number of trial bindings made.
    pub nodes: u64,
    /// Number of trial bindings undone.
    pub backtracks: u64,
    /// Wall-clock solve time in milliseconds.
    pub solve_time_ms: i64,
}

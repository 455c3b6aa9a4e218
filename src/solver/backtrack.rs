//! Chronological backtracking search.
//!
//! # Algorithm
//!
//! 1. A timetable meeting every quota exactly is a solution.
//! 2. Otherwise select the first unbound slot in day-major order
//!    (static variable ordering, no MRV heuristic).
//! 3. Enumerate the slot's legal candidates and apply the configured
//!    ordering policy (shuffle by default).
//! 4. Bind a candidate and recurse. A solved subtree keeps its binding;
//!    an exhausted subtree undoes it and tries the next candidate.
//! 5. A spent or empty candidate list exhausts the branch, leaving the
//!    timetable as this level found it.
//!
//! The search space is finite and every recursive step shrinks the
//! unbound slot set, so the search always terminates.
//!
//! # Reference
//! Russell & Norvig (2020), "Artificial Intelligence: A Modern
//! Approach", Ch. 6.3: Backtracking Search for CSPs

use std::time::{Duration, Instant};

use log::{debug, info, trace};
use rand::seq::SliceRandom;
use rand::Rng;

use super::domain::legal_candidates;
use super::{SearchStats, SolveResult, SolveStatus, SolverConfig, ValueOrdering};
use crate::models::{Slot, Timetable, TimetableProblem};

/// Chronological backtracking solver.
///
/// Holds only configuration; every [`solve`] call owns a fresh
/// [`Timetable`] for its whole duration, so independent solves need
/// nothing more than independent calls. The RNG driving the shuffled
/// value ordering is injected so tests can reproduce search traces.
///
/// # Example
/// ```
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
/// use u_timetable::models::TimetableProblem;
/// use u_timetable::solver::BacktrackSolver;
///
/// let problem = TimetableProblem::new()
///     .with_days(vec!["Monday".into()])
///     .with_periods(vec!["AM".into(), "PM".into()])
///     .with_subjects(vec!["Math".into()])
///     .with_teachers(vec!["Teacher_A".into()])
///     .with_classrooms(vec!["Room_101".into()])
///     .with_capability("Teacher_A", vec!["Math".into()])
///     .with_quota("Math", 2);
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let result = BacktrackSolver::new().solve(&problem, &mut rng);
/// assert!(result.is_solved());
/// ```
///
/// [`solve`]: BacktrackSolver::solve
#[derive(Debug, Clone, Default)]
pub struct BacktrackSolver {
    config: SolverConfig,
}

impl BacktrackSolver {
    /// Creates a solver with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solver with an explicit configuration.
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Solves the problem from an empty timetable.
    ///
    /// Returns [`SolveStatus::Solved`] with the complete timetable,
    /// [`SolveStatus::Exhausted`] when no legal assignment meets every
    /// quota, or [`SolveStatus::Aborted`] when the configured time
    /// limit expires first. No partial assignment is surfaced on
    /// non-success.
    pub fn solve(&self, problem: &TimetableProblem, rng: &mut impl Rng) -> SolveResult {
        let start_time = Instant::now();
        let mut stats = SearchStats::default();

        info!(
            "Solving timetable with {} slots, {} subjects, quota total {}",
            problem.slot_count(),
            problem.subjects.len(),
            problem.total_required(),
        );

        // Provable infeasibility needs no search; exhaustion on such
        // problems must not depend on candidate ordering.
        if let Some(reason) = provably_infeasible(problem) {
            debug!("Problem is infeasible without search: {reason}");
            stats.solve_time_ms = start_time.elapsed().as_millis() as i64;
            return SolveResult {
                status: SolveStatus::Exhausted,
                timetable: None,
                stats,
            };
        }

        let slots = problem.all_slots();
        let deadline = self
            .config
            .time_limit_ms
            .map(|ms| start_time + Duration::from_millis(ms.max(0) as u64));

        let mut timetable = Timetable::new();
        let status = self.explore(problem, &slots, &mut timetable, rng, deadline, &mut stats);
        stats.solve_time_ms = start_time.elapsed().as_millis() as i64;

        info!(
            "Search finished: {status:?} after {} nodes, {} backtracks, {} ms",
            stats.nodes, stats.backtracks, stats.solve_time_ms,
        );

        SolveResult {
            status,
            timetable: (status == SolveStatus::Solved).then_some(timetable),
            stats,
        }
    }

    fn explore(
        &self,
        problem: &TimetableProblem,
        slots: &[Slot],
        timetable: &mut Timetable,
        rng: &mut impl Rng,
        deadline: Option<Instant>,
        stats: &mut SearchStats,
    ) -> SolveStatus {
        if timetable.is_complete(problem) {
            return SolveStatus::Solved;
        }

        // Static variable ordering: first unbound slot in enumeration order.
        let Some(slot) = slots.iter().find(|s| !timetable.is_bound(s)) else {
            // Every slot bound yet some quota unmet: dead branch.
            return SolveStatus::Exhausted;
        };

        let mut candidates = legal_candidates(problem, timetable, slot);
        match self.config.value_ordering {
            ValueOrdering::Shuffled => candidates.shuffle(rng),
            // Generation order is already catalog order.
            ValueOrdering::Lexicographic => {}
        }
        trace!("{} legal candidates at {slot}", candidates.len());

        for activity in candidates {
            if let Some(deadline) = deadline {
                if Instant::now() >= deadline {
                    return SolveStatus::Aborted;
                }
            }

            stats.nodes += 1;
            timetable.bind(slot.clone(), activity);

            match self.explore(problem, slots, timetable, rng, deadline, stats) {
                // The binding that led to success stays in place.
                SolveStatus::Solved => return SolveStatus::Solved,
                SolveStatus::Aborted => return SolveStatus::Aborted,
                SolveStatus::Exhausted => {
                    timetable.unbind(slot);
                    stats.backtracks += 1;
                }
            }
        }

        SolveStatus::Exhausted
    }
}

/// Checks the two infeasibility conditions that are provable from the
/// problem definition alone: a quota total beyond the slot capacity,
/// and an open subject no teacher can cover.
fn provably_infeasible(problem: &TimetableProblem) -> Option<String> {
    let capacity = problem.slot_count() as u32;
    let required = problem.total_required();
    if required > capacity {
        return Some(format!(
            "quota total {required} exceeds slot capacity {capacity}"
        ));
    }

    for (subject, &quota) in &problem.quotas {
        if quota > 0 && problem.capable_teachers(subject).is_empty() {
            return Some(format!("no teacher is capable of '{subject}'"));
        }
    }

    None
}

//! Quota reporting.
//!
//! Read-only per-subject progress counts for rendering solve results.
//! Reporting performs no search and never mutates its inputs; callers
//! own all presentation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{Timetable, TimetableProblem};

/// Scheduled-versus-required slot counts for one subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaStatus {
    /// Slots currently bound to the subject.
    pub scheduled: u32,
    /// Slots the quota map requires.
    pub required: u32,
}

impl QuotaStatus {
    /// Whether the subject's quota is met exactly.
    pub fn is_met(&self) -> bool {
        self.scheduled == self.required
    }
}

/// Reports quota progress for every cataloged subject.
///
/// Subjects without a quota entry appear with `required` 0. Applying
/// this to the same (timetable, problem) pair twice yields identical
/// output.
pub fn quota_status(
    timetable: &Timetable,
    problem: &TimetableProblem,
) -> HashMap<String, QuotaStatus> {
    problem
        .subjects
        .iter()
        .map(|subject| {
            (
                subject.clone(),
                QuotaStatus {
                    scheduled: timetable.count(subject),
                    required: problem.quota(subject),
                },
            )
        })
        .collect()
}

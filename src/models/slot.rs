//! Slot model.
//!
//! A slot is one unit of schedulable time: a (day, period) pair drawn
//! from the problem's day and period catalogs. Slots are the variables
//! of the timetabling problem and serve as the keys of a [`Timetable`].
//!
//! [`Timetable`]: super::Timetable

use serde::{Deserialize, Serialize};

/// A (day, period) pair identifying one schedulable unit of time.
///
/// Immutable once the problem is defined. The full slot space is the
/// Cartesian product of the day and period catalogs, enumerated
/// day-major by [`TimetableProblem::all_slots`].
///
/// [`TimetableProblem::all_slots`]: super::TimetableProblem::all_slots
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    /// Day identifier (e.g., "Monday").
    pub day: String,
    /// Period identifier within the day (e.g., "09:00-10:00").
    pub period: String,
}

impl Slot {
    /// Creates a new slot.
    pub fn new(day: impl Into<String>, period: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            period: period.into(),
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.day, self.period)
    }
}

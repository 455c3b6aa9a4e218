//! Timetabling problem definition.
//!
//! The problem definition is the static side of the search: day and
//! period catalogs spanning the slot space, subject/teacher/classroom
//! catalogs spanning the value space, the teacher→subject capability
//! relation, and the per-subject quota map. It is constructed once and
//! never mutated while a solve is in flight.
//!
//! # Reference
//! Schaerf (1999), "A Survey of Automated Timetabling"

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Slot, Timetable};

/// Static description of a timetabling problem.
///
/// Catalogs keep their construction order; [`all_slots`] enumerates the
/// day × period space day-major in that order, which is also the
/// variable order of the backtracking search.
///
/// # Example
/// ```
/// use u_timetable::models::TimetableProblem;
///
/// let problem = TimetableProblem::new()
///     .with_days(vec!["Monday".into(), "Tuesday".into()])
///     .with_periods(vec!["AM".into(), "PM".into()])
///     .with_subjects(vec!["Math".into()])
///     .with_teachers(vec!["Teacher_A".into()])
///     .with_classrooms(vec!["Room_101".into()])
///     .with_capability("Teacher_A", vec!["Math".into()])
///     .with_quota("Math", 2);
///
/// assert_eq!(problem.slot_count(), 4);
/// assert_eq!(problem.total_required(), 2);
/// ```
///
/// [`all_slots`]: TimetableProblem::all_slots
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimetableProblem {
    /// Day catalog, in display/search order.
    pub days: Vec<String>,
    /// Period catalog, in display/search order.
    pub periods: Vec<String>,
    /// Subject catalog.
    pub subjects: Vec<String>,
    /// Teacher catalog.
    pub teachers: Vec<String>,
    /// Classroom catalog.
    pub classrooms: Vec<String>,
    /// Capability relation: teacher → subjects that teacher may teach.
    pub capabilities: HashMap<String, Vec<String>>,
    /// Quota map: subject → required number of slots across the schedule.
    pub quotas: HashMap<String, u32>,
}

impl TimetableProblem {
    /// Creates an empty problem definition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the day catalog.
    pub fn with_days(mut self, days: Vec<String>) -> Self {
        self.days = days;
        self
    }

    /// Sets the period catalog.
    pub fn with_periods(mut self, periods: Vec<String>) -> Self {
        self.periods = periods;
        self
    }

    /// Sets the subject catalog.
    pub fn with_subjects(mut self, subjects: Vec<String>) -> Self {
        self.subjects = subjects;
        self
    }

    /// Sets the teacher catalog.
    pub fn with_teachers(mut self, teachers: Vec<String>) -> Self {
        self.teachers = teachers;
        self
    }

    /// Sets the classroom catalog.
    pub fn with_classrooms(mut self, classrooms: Vec<String>) -> Self {
        self.classrooms = classrooms;
        self
    }

    /// Declares the subjects a teacher is qualified to teach.
    pub fn with_capability(mut self, teacher: impl Into<String>, subjects: Vec<String>) -> Self {
        self.capabilities.insert(teacher.into(), subjects);
        self
    }

    /// Sets the required slot count for a subject.
    ///
    /// A subject with no quota entry requires zero slots and is never
    /// offered to the search.
    pub fn with_quota(mut self, subject: impl Into<String>, required: u32) -> Self {
        self.quotas.insert(subject.into(), required);
        self
    }

    /// Enumerates the full slot space, day-major then period.
    ///
    /// Deterministic and restartable: the same problem always yields the
    /// same sequence. This order is the variable order of the search.
    pub fn all_slots(&self) -> Vec<Slot> {
        let mut slots = Vec::with_capacity(self.slot_count());
        for day in &self.days {
            for period in &self.periods {
                slots.push(Slot::new(day.clone(), period.clone()));
            }
        }
        slots
    }

    /// Total number of slots (days × periods).
    pub fn slot_count(&self) -> usize {
        self.days.len() * self.periods.len()
    }

    /// Sum of all subject quotas.
    pub fn total_required(&self) -> u32 {
        self.quotas.values().sum()
    }

    /// Required slot count for a subject (0 if unquoted).
    pub fn quota(&self, subject: &str) -> u32 {
        self.quotas.get(subject).copied().unwrap_or(0)
    }

    /// Whether a teacher is qualified to teach a subject.
    pub fn is_capable(&self, teacher: &str, subject: &str) -> bool {
        self.capabilities
            .get(teacher)
            .is_some_and(|subjects| subjects.iter().any(|s| s == subject))
    }

    /// Teachers qualified for a subject, in teacher-catalog order.
    pub fn capable_teachers(&self, subject: &str) -> Vec<&str> {
        self.teachers
            .iter()
            .filter(|t| self.is_capable(t, subject))
            .map(|t| t.as_str())
            .collect()
    }

    /// Subjects whose bound slot count is still below quota.
    ///
    /// Pure function of the given timetable; returned in subject-catalog
    /// order. Subjects without a quota entry never appear.
    pub fn subjects_needing_more(&self, timetable: &Timetable) -> Vec<&str> {
        self.subjects
            .iter()
            .filter(|s| timetable.count(s) < self.quota(s))
            .map(|s| s.as_str())
            .collect()
    }
}

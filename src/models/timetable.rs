//! Timetable (assignment) model.
//!
//! A timetable is the partial Slot→Activity mapping under construction
//! during search, and the sole output artifact of a successful solve.
//! `bind` and `unbind` are the only mutators; the search layer pairs
//! them on every branch so the undo discipline stays auditable. At most
//! one activity is ever bound per slot.

use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::{Activity, Slot, TimetableProblem};

/// A partial or complete assignment of activities to slots.
///
/// Grows by one binding per successful search step and shrinks by one
/// on backtrack. A timetable is complete when every subject's bound
/// count equals its quota exactly; slots may legitimately remain free.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timetable {
    bindings: HashMap<Slot, Activity>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a binding at an unbound slot.
    ///
    /// # Panics
    /// Panics if the slot is already bound. A double bind is a defect in
    /// the calling search logic, not a recoverable condition.
    pub fn bind(&mut self, slot: Slot, activity: Activity) {
        match self.bindings.entry(slot) {
            Entry::Vacant(entry) => {
                entry.insert(activity);
            }
            Entry::Occupied(entry) => panic!("slot {} is already bound", entry.key()),
        }
    }

    /// Removes and returns the binding at a bound slot.
    ///
    /// # Panics
    /// Panics if the slot is unbound. A double unbind is a defect in the
    /// calling search logic, not a recoverable condition.
    pub fn unbind(&mut self, slot: &Slot) -> Activity {
        self.bindings
            .remove(slot)
            .unwrap_or_else(|| panic!("slot {slot} is not bound"))
    }

    /// The activity bound at a slot, if any.
    pub fn activity_at(&self, slot: &Slot) -> Option<&Activity> {
        self.bindings.get(slot)
    }

    /// Whether a slot currently has a binding.
    pub fn is_bound(&self, slot: &Slot) -> bool {
        self.bindings.contains_key(slot)
    }

    /// Number of slots currently bound to the given subject.
    pub fn count(&self, subject: &str) -> u32 {
        self.bindings
            .values()
            .filter(|a| a.subject == subject)
            .count() as u32
    }

    /// Whether every subject's bound count equals its quota exactly.
    ///
    /// This is the termination predicate of a successful search. It does
    /// not require every slot to be filled: once all quotas are met the
    /// remaining slots stay free.
    pub fn is_complete(&self, problem: &TimetableProblem) -> bool {
        problem
            .quotas
            .iter()
            .all(|(subject, &required)| self.count(subject) == required)
    }

    /// Number of bound slots.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no slot is bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterates over all (slot, activity) bindings in arbitrary order.
    pub fn bindings(&self) -> impl Iterator<Item = (&Slot, &Activity)> {
        self.bindings.iter()
    }

    /// All bindings involving a given teacher.
    pub fn bindings_for_teacher(&self, teacher: &str) -> Vec<(&Slot, &Activity)> {
        self.bindings
            .iter()
            .filter(|(_, a)| a.teacher == teacher)
            .collect()
    }

    /// All bindings on a given day.
    pub fn bindings_for_day(&self, day: &str) -> Vec<(&Slot, &Activity)> {
        self.bindings
            .iter()
            .filter(|(slot, _)| slot.day == day)
            .collect()
    }
}

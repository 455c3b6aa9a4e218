//! Dynamic domain evaluation.
//!
//! Pure conflict checks over a (problem, timetable) pair. The legal
//! value set of a slot depends on the current partial assignment, since
//! remaining quotas and slot occupancy both shrink it; it must be
//! recomputed after every bind and unbind.

use crate::models::{Activity, Slot, Timetable, TimetableProblem};

/// Whether an activity may be placed at a slot under the current
/// partial assignment.
///
/// Returns `false` when the teacher is not capable of the subject, or
/// when an existing binding at the same slot would share the teacher or
/// the classroom. At most one activity is ever bound per slot, so an
/// occupied slot admits nothing further. Ordinary illegality is a
/// boolean outcome, never an error.
pub fn is_legal(
    problem: &TimetableProblem,
    timetable: &Timetable,
    slot: &Slot,
    activity: &Activity,
) -> bool {
    if !problem.is_capable(&activity.teacher, &activity.subject) {
        return false;
    }

    // One binding per slot: an existing binding occupies both the
    // teacher and the classroom for the whole slot.
    timetable.activity_at(slot).is_none()
}

/// Enumerates every legal activity for a slot.
///
/// An activity qualifies when its subject still needs slots under the
/// quota map, its teacher is capable of its subject, and [`is_legal`]
/// accepts it. Candidates are generated in catalog order (subject, then
/// teacher, then classroom); any further ordering policy belongs to the
/// search layer.
pub fn legal_candidates(
    problem: &TimetableProblem,
    timetable: &Timetable,
    slot: &Slot,
) -> Vec<Activity> {
    let mut candidates = Vec::new();

    for subject in problem.subjects_needing_more(timetable) {
        for teacher in problem.capable_teachers(subject) {
            for classroom in &problem.classrooms {
                let activity = Activity::new(subject, teacher, classroom.clone());
                if is_legal(problem, timetable, slot, &activity) {
                    candidates.push(activity);
                }
            }
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_problem() -> TimetableProblem {
        TimetableProblem::new()
            .with_days(vec!["Monday".into()])
            .with_periods(vec!["AM".into(), "PM".into()])
            .with_subjects(vec!["Math".into(), "English".into()])
            .with_teachers(vec!["Teacher_A".into(), "Teacher_B".into()])
            .with_classrooms(vec!["Room_101".into(), "Room_102".into()])
            .with_capability("Teacher_A", vec!["Math".into()])
            .with_capability("Teacher_B", vec!["English".into()])
            .with_quota("Math", 1)
            .with_quota("English", 1)
    }

    #[test]
    fn test_is_legal_requires_capability() {
        let problem = sample_problem();
        let timetable = Timetable::new();
        let slot = Slot::new("Monday", "AM");

        assert!(is_legal(
            &problem,
            &timetable,
            &slot,
            &Activity::new("Math", "Teacher_A", "Room_101"),
        ));
        // Teacher_B does not teach Math.
        assert!(!is_legal(
            &problem,
            &timetable,
            &slot,
            &Activity::new("Math", "Teacher_B", "Room_101"),
        ));
    }

    #[test]
    fn test_is_legal_rejects_occupied_slot() {
        let problem = sample_problem();
        let mut timetable = Timetable::new();
        let slot = Slot::new("Monday", "AM");
        timetable.bind(slot.clone(), Activity::new("Math", "Teacher_A", "Room_101"));

        // Same teacher, same classroom, and a fully disjoint activity
        // are all blocked once the slot is bound.
        assert!(!is_legal(
            &problem,
            &timetable,
            &slot,
            &Activity::new("English", "Teacher_B", "Room_101"),
        ));
        assert!(!is_legal(
            &problem,
            &timetable,
            &slot,
            &Activity::new("English", "Teacher_B", "Room_102"),
        ));
    }

    #[test]
    fn test_is_legal_other_slots_unaffected() {
        let problem = sample_problem();
        let mut timetable = Timetable::new();
        timetable.bind(
            Slot::new("Monday", "AM"),
            Activity::new("Math", "Teacher_A", "Room_101"),
        );

        // The same teacher and classroom are free again in the next period.
        assert!(is_legal(
            &problem,
            &timetable,
            &Slot::new("Monday", "PM"),
            &Activity::new("English", "Teacher_B", "Room_101"),
        ));
    }

    #[test]
    fn test_candidates_cross_needed_subjects_with_rooms() {
        let problem = sample_problem();
        let timetable = Timetable::new();
        let slot = Slot::new("Monday", "AM");

        let candidates = legal_candidates(&problem, &timetable, &slot);

        // 2 open subjects × 1 capable teacher each × 2 rooms.
        assert_eq!(candidates.len(), 4);
        assert!(candidates.contains(&Activity::new("Math", "Teacher_A", "Room_101")));
        assert!(candidates.contains(&Activity::new("English", "Teacher_B", "Room_102")));
    }

    #[test]
    fn test_candidates_never_pair_teacher_with_foreign_subject() {
        let problem = sample_problem();
        let timetable = Timetable::new();
        let slot = Slot::new("Monday", "AM");

        for candidate in legal_candidates(&problem, &timetable, &slot) {
            assert!(
                problem.is_capable(&candidate.teacher, &candidate.subject),
                "offered {candidate} without capability"
            );
        }
    }

    #[test]
    fn test_candidates_empty_for_teacher_outside_open_quotas() {
        // Teacher_C teaches only History, which carries no quota: no
        // candidate set may ever name Teacher_C.
        let problem = sample_problem()
            .with_subjects(vec!["Math".into(), "English".into(), "History".into()])
            .with_teachers(vec![
                "Teacher_A".into(),
                "Teacher_B".into(),
                "Teacher_C".into(),
            ])
            .with_capability("Teacher_C", vec!["History".into()]);

        let timetable = Timetable::new();
        let candidates = legal_candidates(&problem, &timetable, &Slot::new("Monday", "AM"));

        assert!(!candidates.is_empty());
        assert!(candidates.iter().all(|a| a.teacher != "Teacher_C"));
    }

    #[test]
    fn test_candidates_drop_met_quotas() {
        let problem = sample_problem();
        let mut timetable = Timetable::new();
        timetable.bind(
            Slot::new("Monday", "AM"),
            Activity::new("Math", "Teacher_A", "Room_101"),
        );

        // Math quota met: only English remains.
        let candidates = legal_candidates(&problem, &timetable, &Slot::new("Monday", "PM"));
        assert_eq!(candidates.len(), 2);
        assert!(candidates.iter().all(|a| a.subject == "English"));
    }

    #[test]
    fn test_candidates_empty_at_bound_slot() {
        let problem = sample_problem();
        let mut timetable = Timetable::new();
        let slot = Slot::new("Monday", "AM");
        timetable.bind(slot.clone(), Activity::new("Math", "Teacher_A", "Room_101"));

        assert!(legal_candidates(&problem, &timetable, &slot).is_empty());
    }

    #[test]
    fn test_candidates_in_catalog_order() {
        let problem = sample_problem();
        let timetable = Timetable::new();

        let candidates = legal_candidates(&problem, &timetable, &Slot::new("Monday", "AM"));
        let expected = vec![
            Activity::new("Math", "Teacher_A", "Room_101"),
            Activity::new("Math", "Teacher_A", "Room_102"),
            Activity::new("English", "Teacher_B", "Room_101"),
            Activity::new("English", "Teacher_B", "Room_102"),
        ];
        assert_eq!(candidates, expected);
    }
}

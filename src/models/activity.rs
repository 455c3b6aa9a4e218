//! Activity model.
//!
//! An activity is the smallest assignable unit of the timetable: a
//! subject taught by a teacher in a classroom. Activities are the
//! values bound to slots during search.

use serde::{Deserialize, Serialize};

/// A (subject, teacher, classroom) triple assignable to a slot.
///
/// Subjects, teachers, and classrooms are drawn from the fixed catalogs
/// of a [`TimetableProblem`]. An activity is only legal at a slot when
/// its teacher is capable of its subject and neither the teacher nor
/// the classroom is otherwise occupied at that slot.
///
/// [`TimetableProblem`]: super::TimetableProblem
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Activity {
    /// Subject being taught.
    pub subject: String,
    /// Teacher delivering the subject.
    pub teacher: String,
    /// Classroom hosting the activity.
    pub classroom: String,
}

impl Activity {
    /// Creates a new activity.
    pub fn new(
        subject: impl Into<String>,
        teacher: impl Into<String>,
        classroom: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            teacher: teacher.into(),
            classroom: classroom.into(),
        }
    }
}

impl std::fmt::Display for Activity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {} - {}", self.subject, self.teacher, self.classroom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_fields() {
        let a = Activity::new("Math", "Teacher_A", "Room_101");
        assert_eq!(a.subject, "Math");
        assert_eq!(a.teacher, "Teacher_A");
        assert_eq!(a.classroom, "Room_101");
    }

    #[test]
    fn test_activity_equality() {
        let a = Activity::new("Math", "Teacher_A", "Room_101");
        let b = Activity::new("Math", "Teacher_A", "Room_101");
        let c = Activity::new("Math", "Teacher_A", "Room_102");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_activity_display() {
        let a = Activity::new("Physics", "Teacher_B", "Room_103");
        assert_eq!(a.to_string(), "Physics - Teacher_B - Room_103");
    }
}

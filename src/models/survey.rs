//! Teacher survey records.
//!
//! Teachers report pairs of students who work well together or should be
//! separated, plus free-form special considerations for individual students.

use serde::{Deserialize, Serialize};

/// Teacher-reported relation between two students.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairRelation {
    WorksWell,
    ShouldSeparate,
}

/// A pair of students with a reported relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentPair {
    pub first_id: String,
    pub second_id: String,
    pub relation: PairRelation,
}

/// A special consideration for one student.
///
/// The note is opaque to the optimizer; only the student's presence in the
/// surveyed teacher's class is evaluated (see
/// [`crate::scoring`] on the teacher-preference factor).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialConsideration {
    pub student_id: String,
    pub note: String,
}

/// Everything one teacher reported about the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherSurvey {
    /// The teacher this survey belongs to.
    pub teacher_id: String,
    /// Reported student pairs.
    pub pairs: Vec<StudentPair>,
    /// Special considerations.
    pub considerations: Vec<SpecialConsideration>,
}

impl TeacherSurvey {
    /// Creates an empty survey for a teacher.
    pub fn new(teacher_id: impl Into<String>) -> Self {
        Self {
            teacher_id: teacher_id.into(),
            pairs: Vec::new(),
            considerations: Vec::new(),
        }
    }

    /// Adds a student pair.
    pub fn with_pair(
        mut self,
        first_id: impl Into<String>,
        second_id: impl Into<String>,
        relation: PairRelation,
    ) -> Self {
        self.pairs.push(StudentPair {
            first_id: first_id.into(),
            second_id: second_id.into(),
            relation,
        });
        self
    }

    /// Adds a special consideration.
    pub fn with_consideration(
        mut self,
        student_id: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        self.considerations.push(SpecialConsideration {
            student_id: student_id.into(),
            note: note.into(),
        });
        self
    }
}

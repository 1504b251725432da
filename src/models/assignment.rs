//! Assignment representation.
//!
//! A [`ClassAssignment`] is the search's solution type: two flat index
//! vectors rather than nested per-class student lists. `class_of[s]` places
//! student `s` in exactly one class, so the partition invariant — every
//! roster student in exactly one class, no omission, no duplication — holds
//! structurally and survives every neighbor move. Cloning a candidate copies
//! two `Vec<usize>`, not a deep object graph.

use serde::{Deserialize, Serialize};

/// An index-based partition of all students into teacher-bound classes.
///
/// Indices refer into the rosters held by
/// [`crate::problem::BalanceProblem`]; use
/// [`crate::problem::BalanceProblem::class_groups`] to resolve them back to
/// identifiers for display or export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassAssignment {
    /// Student index → class index.
    class_of: Vec<usize>,
    /// Class index → teacher index.
    teacher_of: Vec<usize>,
}

impl ClassAssignment {
    pub(crate) fn new(class_of: Vec<usize>, teacher_of: Vec<usize>) -> Self {
        debug_assert!(class_of.iter().all(|&c| c < teacher_of.len()));
        Self {
            class_of,
            teacher_of,
        }
    }

    /// Number of classes.
    pub fn class_count(&self) -> usize {
        self.teacher_of.len()
    }

    /// Number of students.
    pub fn student_count(&self) -> usize {
        self.class_of.len()
    }

    /// Class index of a student.
    pub fn class_of(&self, student: usize) -> usize {
        self.class_of[student]
    }

    /// Teacher index bound to a class.
    pub fn teacher_of(&self, class: usize) -> usize {
        self.teacher_of[class]
    }

    /// Member student indices per class.
    pub fn members_by_class(&self) -> Vec<Vec<usize>> {
        let mut members = vec![Vec::new(); self.class_count()];
        for (student, &class) in self.class_of.iter().enumerate() {
            members[class].push(student);
        }
        members
    }

    /// Number of students in each class.
    pub fn class_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0usize; self.class_count()];
        for &class in &self.class_of {
            sizes[class] += 1;
        }
        sizes
    }

    pub(crate) fn reassign(&mut self, student: usize, class: usize) {
        debug_assert!(class < self.class_count());
        self.class_of[student] = class;
    }

    pub(crate) fn swap_teachers(&mut self, a: usize, b: usize) {
        self.teacher_of.swap(a, b);
    }
}

/// A resolved class: bound teacher identifier plus member student identifiers.
///
/// The external view consumed by reporting and export collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassGroup {
    /// Identifier of the bound teacher.
    pub teacher_id: String,
    /// Identifiers of the member students. Order carries no meaning.
    pub student_ids: Vec<String>,
}

//! Problem definition: rosters, preferences, surveys, and weights.
//!
//! [`BalanceProblem`] validates its inputs once at construction and resolves
//! every string identifier to a roster index, so the per-iteration scoring
//! pass never compares or hashes a string.
//!
//! Identifier resolution conventions:
//! - a preference record whose student id is unknown is dropped;
//! - a survey whose teacher id is unknown is dropped;
//! - an unknown peer or pair-member id resolves to `None` and is treated as
//!   "in no class" by membership tests.

use std::collections::HashMap;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::Error;
use crate::models::{
    ClassAssignment, ClassGroup, LearningStyle, PairRelation, ParentPreference, PeerRelation,
    Student, Teacher, TeacherSurvey, Weights,
};
use crate::scoring::{self, ScoreBreakdown};

/// A parent preference with identifiers resolved to roster indices.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedPreference {
    /// Index of the student the record belongs to.
    pub(crate) student: usize,
    /// Whether the record named any preferred teachers at all. The teacher
    /// statement exists (and can fail) even when none of the named ids are
    /// on the roster.
    pub(crate) has_teacher_statement: bool,
    /// Indices of the named teachers that exist on the roster.
    pub(crate) teachers: Vec<usize>,
    /// Peer preferences; `None` marks a peer id not on the roster.
    pub(crate) peers: Vec<(Option<usize>, PeerRelation)>,
    /// Reported learning style.
    pub(crate) learning_style: Option<LearningStyle>,
}

/// A teacher survey with identifiers resolved to roster indices.
#[derive(Debug, Clone, Default)]
pub(crate) struct ResolvedSurvey {
    /// Student pairs; `None` marks an id not on the roster.
    pub(crate) pairs: Vec<(Option<usize>, Option<usize>, PairRelation)>,
    /// Students with special considerations; `None` marks an unknown id.
    pub(crate) considerations: Vec<Option<usize>>,
}

/// One optimization problem: immutable rosters plus scoring configuration.
///
/// Every [`ClassAssignment`] scored or produced by this crate refers into
/// the rosters held here.
#[derive(Debug, Clone)]
pub struct BalanceProblem {
    students: Vec<Student>,
    teachers: Vec<Teacher>,
    weights: Weights,
    preferences: Vec<ResolvedPreference>,
    surveys: HashMap<usize, ResolvedSurvey>,
}

impl BalanceProblem {
    /// Builds a problem, validating rosters and weights.
    ///
    /// Fails with [`Error::InvalidInput`] on duplicate student or teacher
    /// ids, duplicate per-student preference records, duplicate per-teacher
    /// surveys, or non-finite weights.
    pub fn new(
        students: Vec<Student>,
        teachers: Vec<Teacher>,
        parent_preferences: Vec<ParentPreference>,
        teacher_surveys: Vec<TeacherSurvey>,
        weights: Weights,
    ) -> Result<Self, Error> {
        weights.validate()?;

        let mut student_index: HashMap<&str, usize> = HashMap::with_capacity(students.len());
        for (i, s) in students.iter().enumerate() {
            if student_index.insert(s.id.as_str(), i).is_some() {
                return Err(Error::InvalidInput(format!(
                    "duplicate student id '{}'",
                    s.id
                )));
            }
        }

        let mut teacher_index: HashMap<&str, usize> = HashMap::with_capacity(teachers.len());
        for (i, t) in teachers.iter().enumerate() {
            if teacher_index.insert(t.id.as_str(), i).is_some() {
                return Err(Error::InvalidInput(format!(
                    "duplicate teacher id '{}'",
                    t.id
                )));
            }
        }

        let mut preferences = Vec::with_capacity(parent_preferences.len());
        let mut seen_pref = vec![false; students.len()];
        for pref in &parent_preferences {
            let Some(&student) = student_index.get(pref.student_id.as_str()) else {
                debug!(
                    "dropping preference record for unknown student '{}'",
                    pref.student_id
                );
                continue;
            };
            if seen_pref[student] {
                return Err(Error::InvalidInput(format!(
                    "duplicate preference record for student '{}'",
                    pref.student_id
                )));
            }
            seen_pref[student] = true;
            preferences.push(ResolvedPreference {
                student,
                has_teacher_statement: !pref.preferred_teachers.is_empty(),
                teachers: pref
                    .preferred_teachers
                    .iter()
                    .filter_map(|id| teacher_index.get(id.as_str()).copied())
                    .collect(),
                peers: pref
                    .peers
                    .iter()
                    .map(|p| (student_index.get(p.peer_id.as_str()).copied(), p.relation))
                    .collect(),
                learning_style: pref.learning_style,
            });
        }

        let mut surveys: HashMap<usize, ResolvedSurvey> = HashMap::new();
        for survey in &teacher_surveys {
            let Some(&teacher) = teacher_index.get(survey.teacher_id.as_str()) else {
                debug!(
                    "dropping survey for unknown teacher '{}'",
                    survey.teacher_id
                );
                continue;
            };
            if surveys.contains_key(&teacher) {
                return Err(Error::InvalidInput(format!(
                    "duplicate survey for teacher '{}'",
                    survey.teacher_id
                )));
            }
            surveys.insert(
                teacher,
                ResolvedSurvey {
                    pairs: survey
                        .pairs
                        .iter()
                        .map(|p| {
                            (
                                student_index.get(p.first_id.as_str()).copied(),
                                student_index.get(p.second_id.as_str()).copied(),
                                p.relation,
                            )
                        })
                        .collect(),
                    considerations: survey
                        .considerations
                        .iter()
                        .map(|c| student_index.get(c.student_id.as_str()).copied())
                        .collect(),
                },
            );
        }

        Ok(Self {
            students,
            teachers,
            weights,
            preferences,
            surveys,
        })
    }

    /// The student roster.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// The teacher roster.
    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    /// The configured factor weights.
    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub(crate) fn preferences(&self) -> &[ResolvedPreference] {
        &self.preferences
    }

    pub(crate) fn survey_for(&self, teacher: usize) -> Option<&ResolvedSurvey> {
        self.surveys.get(&teacher)
    }

    /// Builds a random initial assignment.
    ///
    /// Shuffles the roster with the injected RNG, then partitions it into
    /// `class_count` contiguous groups as evenly as possible: base size
    /// `n / class_count`, with the first `n % class_count` classes taking
    /// one extra student. Class `i` is bound to teacher `i`.
    ///
    /// Fails with [`Error::InvalidInput`] when `class_count` is zero or the
    /// teacher roster has fewer than `class_count` entries. An empty student
    /// roster is valid and yields empty classes.
    pub fn initial_assignment<R: Rng>(
        &self,
        class_count: usize,
        rng: &mut R,
    ) -> Result<ClassAssignment, Error> {
        if class_count == 0 {
            return Err(Error::InvalidInput(
                "class_count must be at least 1".into(),
            ));
        }
        if self.teachers.len() < class_count {
            return Err(Error::InvalidInput(format!(
                "{} classes requested but only {} teachers available",
                class_count,
                self.teachers.len()
            )));
        }

        let n = self.students.len();
        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(rng);

        let base = n / class_count;
        let extra = n % class_count;
        let mut class_of = vec![0usize; n];
        let mut cursor = 0;
        for class in 0..class_count {
            let size = base + usize::from(class < extra);
            for &student in &order[cursor..cursor + size] {
                class_of[student] = class;
            }
            cursor += size;
        }

        debug!(
            "initial assignment: {} students over {} classes (base size {}, {} oversized)",
            n, class_count, base, extra
        );
        Ok(ClassAssignment::new(
            class_of,
            (0..class_count).collect(),
        ))
    }

    /// Checks that an assignment refers only into this problem's rosters.
    ///
    /// Assignments built by [`Self::initial_assignment`] or returned by the
    /// annealer always pass; this guards assignments that arrive from
    /// outside — deserialized from a client, say — before they are scored
    /// or resolved. Rejects a student count that differs from the roster,
    /// a class index at or past the class count, and a teacher index the
    /// roster does not back.
    pub fn check_assignment(&self, assignment: &ClassAssignment) -> Result<(), Error> {
        if assignment.student_count() != self.students.len() {
            return Err(Error::InvalidInput(format!(
                "assignment covers {} students but the roster has {}",
                assignment.student_count(),
                self.students.len()
            )));
        }
        for student in 0..assignment.student_count() {
            let class = assignment.class_of(student);
            if class >= assignment.class_count() {
                return Err(Error::InvalidInput(format!(
                    "student {student} placed in class {class} but the assignment has only {} classes",
                    assignment.class_count()
                )));
            }
        }
        for class in 0..assignment.class_count() {
            let teacher = assignment.teacher_of(class);
            if teacher >= self.teachers.len() {
                return Err(Error::InvalidInput(format!(
                    "class {class} bound to teacher index {teacher} but the roster has {} teachers",
                    self.teachers.len()
                )));
            }
        }
        Ok(())
    }

    /// Resolves an assignment back to teacher and student identifiers.
    ///
    /// Assignments from outside this problem should pass
    /// [`Self::check_assignment`] first; indices the rosters do not back
    /// panic here.
    pub fn class_groups(&self, assignment: &ClassAssignment) -> Vec<ClassGroup> {
        assignment
            .members_by_class()
            .into_iter()
            .enumerate()
            .map(|(class, members)| ClassGroup {
                teacher_id: self.teachers[assignment.teacher_of(class)].id.clone(),
                student_ids: members
                    .into_iter()
                    .map(|s| self.students[s].id.clone())
                    .collect(),
            })
            .collect()
    }

    /// Weighted overall score of an assignment.
    ///
    /// Assignments from outside this problem should pass
    /// [`Self::check_assignment`] first; indices the rosters do not back
    /// panic here.
    pub fn score(&self, assignment: &ClassAssignment) -> f64 {
        scoring::weighted_score(self, assignment)
    }

    /// Per-factor score/weight breakdown of an assignment.
    ///
    /// Same contract as [`Self::score`]: out-of-roster indices panic.
    pub fn breakdown(&self, assignment: &ClassAssignment) -> ScoreBreakdown {
        ScoreBreakdown::calculate(self, assignment)
    }
}

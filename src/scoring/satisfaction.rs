//! Preference-satisfaction scores.
//!
//! Both scores are satisfied/total statement ratios with vacuous
//! satisfaction: zero statements score 1.0 (nothing was violated because
//! nothing was asked).

use crate::models::{ClassAssignment, PairRelation, PeerRelation};
use crate::problem::BalanceProblem;

/// Fraction of parent statements the assignment satisfies.
///
/// Per preference record: the preferred-teacher list is one statement,
/// satisfied when the assigned teacher is named in it; each peer preference
/// is one statement, satisfied when the peer's co-membership matches the
/// requested relation (a peer missing from the roster is never a
/// co-member); a reported learning style is one statement, satisfied when
/// the assigned teacher's teaching style is compatible.
pub(crate) fn parent_preference_satisfaction(
    problem: &BalanceProblem,
    assignment: &ClassAssignment,
) -> f64 {
    let mut satisfied = 0usize;
    let mut total = 0usize;

    for pref in problem.preferences() {
        let class = assignment.class_of(pref.student);
        let teacher = assignment.teacher_of(class);

        if pref.has_teacher_statement {
            total += 1;
            if pref.teachers.contains(&teacher) {
                satisfied += 1;
            }
        }

        for &(peer, relation) in &pref.peers {
            total += 1;
            let same_class = peer.is_some_and(|p| assignment.class_of(p) == class);
            let ok = match relation {
                PeerRelation::Together => same_class,
                PeerRelation::Separate => !same_class,
            };
            if ok {
                satisfied += 1;
            }
        }

        if let Some(style) = pref.learning_style {
            total += 1;
            if style.matches(problem.teachers()[teacher].style) {
                satisfied += 1;
            }
        }
    }

    ratio(satisfied, total)
}

/// Fraction of teacher-survey statements the assignment satisfies.
///
/// For each class whose bound teacher filed a survey: a works-well pair is
/// satisfied when both students' membership status in this class agrees
/// (both in, or both out); a should-separate pair when it disagrees. A
/// special consideration adds one satisfied statement only when its student
/// sits in this class; the consideration note is never inspected.
pub(crate) fn teacher_preference_satisfaction(
    problem: &BalanceProblem,
    assignment: &ClassAssignment,
) -> f64 {
    let mut satisfied = 0usize;
    let mut total = 0usize;

    for class in 0..assignment.class_count() {
        let Some(survey) = problem.survey_for(assignment.teacher_of(class)) else {
            continue;
        };

        for &(first, second, relation) in &survey.pairs {
            total += 1;
            let first_in = first.is_some_and(|s| assignment.class_of(s) == class);
            let second_in = second.is_some_and(|s| assignment.class_of(s) == class);
            let ok = match relation {
                PairRelation::WorksWell => first_in == second_in,
                PairRelation::ShouldSeparate => first_in != second_in,
            };
            if ok {
                satisfied += 1;
            }
        }

        for &student in &survey.considerations {
            if student.is_some_and(|s| assignment.class_of(s) == class) {
                total += 1;
                satisfied += 1;
            }
        }
    }

    ratio(satisfied, total)
}

fn ratio(satisfied: usize, total: usize) -> f64 {
    if total == 0 {
        1.0
    } else {
        satisfied as f64 / total as f64
    }
}

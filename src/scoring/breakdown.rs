//! Per-factor score breakdown.
//!
//! Re-expresses an assignment's overall score as a factor-by-factor table
//! for explainability. The annealer's objective *is*
//! [`ScoreBreakdown::total`], so the reported factors always sum to the
//! score the search optimized.

use serde::{Deserialize, Serialize};

use super::{balance, satisfaction};
use crate::models::ClassAssignment;
use crate::problem::BalanceProblem;

/// One factor's raw score and configured weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorScore {
    /// Raw sub-score before weighting.
    pub score: f64,
    /// Configured weight.
    pub weight: f64,
}

impl FactorScore {
    /// The factor's contribution to the overall score.
    pub fn weighted(&self) -> f64 {
        self.score * self.weight
    }
}

/// All seven factor scores for one assignment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub academic_balance: FactorScore,
    pub behavioral_balance: FactorScore,
    pub special_needs: FactorScore,
    pub gender_balance: FactorScore,
    pub parent_preferences: FactorScore,
    pub teacher_preferences: FactorScore,
    pub class_size: FactorScore,
}

impl ScoreBreakdown {
    /// Computes all seven factors for an assignment.
    pub fn calculate(problem: &BalanceProblem, assignment: &ClassAssignment) -> Self {
        let students = problem.students();
        let weights = problem.weights();
        let members = assignment.members_by_class();

        Self {
            academic_balance: FactorScore {
                score: balance::academic_balance(students, &members),
                weight: weights.academic_balance,
            },
            behavioral_balance: FactorScore {
                score: balance::behavioral_balance(students, &members),
                weight: weights.behavioral_balance,
            },
            special_needs: FactorScore {
                score: balance::special_needs_spread(students, &members),
                weight: weights.special_needs,
            },
            gender_balance: FactorScore {
                score: balance::gender_balance(students, &members),
                weight: weights.gender_balance,
            },
            parent_preferences: FactorScore {
                score: satisfaction::parent_preference_satisfaction(problem, assignment),
                weight: weights.parent_preferences,
            },
            teacher_preferences: FactorScore {
                score: satisfaction::teacher_preference_satisfaction(problem, assignment),
                weight: weights.teacher_preferences,
            },
            class_size: FactorScore {
                score: balance::class_size_balance(&members),
                weight: weights.class_size,
            },
        }
    }

    /// Factor name / score pairs, in a fixed display order.
    pub fn factors(&self) -> [(&'static str, FactorScore); 7] {
        [
            ("academic_balance", self.academic_balance),
            ("behavioral_balance", self.behavioral_balance),
            ("special_needs", self.special_needs),
            ("gender_balance", self.gender_balance),
            ("parent_preferences", self.parent_preferences),
            ("teacher_preferences", self.teacher_preferences),
            ("class_size", self.class_size),
        ]
    }

    /// Weighted sum of all factors — the overall assignment score.
    pub fn total(&self) -> f64 {
        self.factors().iter().map(|(_, f)| f.weighted()).sum()
    }
}

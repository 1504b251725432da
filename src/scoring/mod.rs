//! Assignment scoring.
//!
//! Seven independent sub-scores combined by caller-supplied weights:
//!
//! | Factor | Shape |
//! |--------|-------|
//! | Academic balance | `1 / (1 + avg within-class variance)` |
//! | Behavioral balance | same, over behavior scores |
//! | Special-needs distribution | `1 / (1 + 10 · variance of fractions)` |
//! | Gender balance | `1 − avg deviation` (unclamped) |
//! | Parent preferences | satisfied / total statements |
//! | Teacher preferences | satisfied / total statements |
//! | Class-size balance | `1 − maxDeviation / mean` |
//!
//! All scoring is pure and allocation-light; one pass is O(total students).

mod balance;
mod breakdown;
mod satisfaction;

pub use breakdown::{FactorScore, ScoreBreakdown};

use crate::models::ClassAssignment;
use crate::problem::BalanceProblem;

/// Weighted overall score of an assignment. Higher is better.
pub fn weighted_score(problem: &BalanceProblem, assignment: &ClassAssignment) -> f64 {
    ScoreBreakdown::calculate(problem, assignment).total()
}

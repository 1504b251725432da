//! Variance-based balance scores.
//!
//! Each function maps an assignment's per-class composition to a scalar.
//! Academic, behavioral and special-needs scores live in (0, 1] by
//! construction; gender and class-size scores are `1 − deviation` forms and
//! are deliberately not clamped, so extreme skew can push them negative.

use std::collections::HashMap;

use crate::models::Student;

/// Population variance; 0.0 for an empty slice.
fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64
}

/// `1 / (1 + mean within-class variance)` of a per-student value.
///
/// 1.0 exactly when every class is uniform in the value; any spread inside
/// any class lowers it.
fn inverse_variance_score<F>(students: &[Student], members: &[Vec<usize>], value: F) -> f64
where
    F: Fn(&Student) -> f64,
{
    if members.is_empty() {
        return 1.0;
    }
    let total: f64 = members
        .iter()
        .map(|class| {
            let values: Vec<f64> = class.iter().map(|&s| value(&students[s])).collect();
            variance(&values)
        })
        .sum();
    1.0 / (1.0 + total / members.len() as f64)
}

/// Academic balance: uniform academic levels within each class score 1.0.
pub(crate) fn academic_balance(students: &[Student], members: &[Vec<usize>]) -> f64 {
    inverse_variance_score(students, members, |s| s.academic_value())
}

/// Behavioral balance: same formula over behavior scores.
pub(crate) fn behavioral_balance(students: &[Student], members: &[Vec<usize>]) -> f64 {
    inverse_variance_score(students, members, |s| s.behavior_value())
}

/// Special-needs distribution: `1 / (1 + 10 · variance)` of the per-class
/// special-needs fractions. The ×10 scaling makes this factor react to much
/// smaller spreads than the level-based scores, since fractions live in
/// [0, 1] rather than on the level scale.
pub(crate) fn special_needs_spread(students: &[Student], members: &[Vec<usize>]) -> f64 {
    if members.is_empty() {
        return 1.0;
    }
    let fractions: Vec<f64> = members
        .iter()
        .map(|class| {
            if class.is_empty() {
                0.0
            } else {
                let flagged = class.iter().filter(|&&s| students[s].special_needs).count();
                flagged as f64 / class.len() as f64
            }
        })
        .collect();
    1.0 / (1.0 + 10.0 * variance(&fractions))
}

/// Gender balance: `1 − mean per-class deviation`, where a class's deviation
/// is the summed absolute distance of each *present* gender's count from
/// `size / distinct genders present`, divided by class size. Empty classes
/// are skipped. Not clamped: three or more genders under heavy skew can push
/// a class deviation past 1 and the score below zero.
pub(crate) fn gender_balance(students: &[Student], members: &[Vec<usize>]) -> f64 {
    let populated: Vec<&Vec<usize>> = members.iter().filter(|c| !c.is_empty()).collect();
    if populated.is_empty() {
        return 1.0;
    }
    let total_deviation: f64 = populated
        .iter()
        .map(|class| {
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for &s in class.iter() {
                *counts.entry(students[s].gender.as_str()).or_insert(0) += 1;
            }
            let size = class.len() as f64;
            let ideal = size / counts.len() as f64;
            let spread: f64 = counts.values().map(|&c| (c as f64 - ideal).abs()).sum();
            spread / size
        })
        .sum();
    1.0 - total_deviation / populated.len() as f64
}

/// Class-size balance: `1 − maxDeviation / mean` over class sizes. 1.0 iff
/// all classes hold the same number of students; an empty roster scores 1.0.
pub(crate) fn class_size_balance(members: &[Vec<usize>]) -> f64 {
    if members.is_empty() {
        return 1.0;
    }
    let sizes: Vec<f64> = members.iter().map(|c| c.len() as f64).collect();
    let mean = sizes.iter().sum::<f64>() / sizes.len() as f64;
    if mean == 0.0 {
        return 1.0;
    }
    let max_deviation = sizes
        .iter()
        .map(|s| (s - mean).abs())
        .fold(0.0_f64, f64::max);
    1.0 - max_deviation / mean
}

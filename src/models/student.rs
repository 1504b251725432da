//! Student model.
//!
//! Students are immutable for the duration of a search; the optimizer only
//! moves them between classes. Academic level and behavior score share one
//! ordinal scale; a missing value scores as the scale midpoint.

use serde::{Deserialize, Serialize};

/// Lowest value of the ordinal level/score scale.
pub const LEVEL_MIN: u8 = 1;
/// Highest value of the ordinal level/score scale.
pub const LEVEL_MAX: u8 = 4;

/// Midpoint used when a level or score is unrecorded.
pub(crate) const LEVEL_MIDPOINT: f64 = (LEVEL_MIN as f64 + LEVEL_MAX as f64) / 2.0;

/// A student to be placed into a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique student identifier.
    pub id: String,
    /// Academic level on the `LEVEL_MIN..=LEVEL_MAX` scale, if assessed.
    pub academic_level: Option<u8>,
    /// Behavior score on the same scale, if assessed.
    pub behavior_score: Option<u8>,
    /// Whether the student has recorded special needs.
    pub special_needs: bool,
    /// Gender category label (open set; compared by equality only).
    pub gender: String,
}

impl Student {
    /// Creates a student with no assessments and no special-needs flag.
    pub fn new(id: impl Into<String>, gender: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            academic_level: None,
            behavior_score: None,
            special_needs: false,
            gender: gender.into(),
        }
    }

    /// Sets the academic level.
    pub fn with_academic_level(mut self, level: u8) -> Self {
        self.academic_level = Some(level);
        self
    }

    /// Sets the behavior score.
    pub fn with_behavior_score(mut self, score: u8) -> Self {
        self.behavior_score = Some(score);
        self
    }

    /// Sets the special-needs flag.
    pub fn with_special_needs(mut self, flag: bool) -> Self {
        self.special_needs = flag;
        self
    }

    /// Academic level as a scoring value; midpoint when unrecorded.
    pub(crate) fn academic_value(&self) -> f64 {
        self.academic_level.map(f64::from).unwrap_or(LEVEL_MIDPOINT)
    }

    /// Behavior score as a scoring value; midpoint when unrecorded.
    pub(crate) fn behavior_value(&self) -> f64 {
        self.behavior_score.map(f64::from).unwrap_or(LEVEL_MIDPOINT)
    }
}

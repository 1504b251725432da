//! Scoring factor weights.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Relative weight of each scoring factor in the overall objective.
///
/// No range or normalization is enforced beyond finiteness; callers own the
/// weight semantics. Note that gender balance is the one factor that can go
/// negative (see [`crate::scoring`]), so an unweighted sum can let it
/// dominate for highly skewed classes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub academic_balance: f64,
    pub behavioral_balance: f64,
    pub special_needs: f64,
    pub gender_balance: f64,
    pub parent_preferences: f64,
    pub teacher_preferences: f64,
    pub class_size: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            academic_balance: 1.0,
            behavioral_balance: 1.0,
            special_needs: 1.0,
            gender_balance: 1.0,
            parent_preferences: 1.0,
            teacher_preferences: 1.0,
            class_size: 1.0,
        }
    }
}

impl Weights {
    /// All factors weighted zero. Useful as a base for single-factor setups.
    pub fn zero() -> Self {
        Self {
            academic_balance: 0.0,
            behavioral_balance: 0.0,
            special_needs: 0.0,
            gender_balance: 0.0,
            parent_preferences: 0.0,
            teacher_preferences: 0.0,
            class_size: 0.0,
        }
    }

    pub fn with_academic_balance(mut self, w: f64) -> Self {
        self.academic_balance = w;
        self
    }

    pub fn with_behavioral_balance(mut self, w: f64) -> Self {
        self.behavioral_balance = w;
        self
    }

    pub fn with_special_needs(mut self, w: f64) -> Self {
        self.special_needs = w;
        self
    }

    pub fn with_gender_balance(mut self, w: f64) -> Self {
        self.gender_balance = w;
        self
    }

    pub fn with_parent_preferences(mut self, w: f64) -> Self {
        self.parent_preferences = w;
        self
    }

    pub fn with_teacher_preferences(mut self, w: f64) -> Self {
        self.teacher_preferences = w;
        self
    }

    pub fn with_class_size(mut self, w: f64) -> Self {
        self.class_size = w;
        self
    }

    /// Rejects non-finite weight entries.
    pub fn validate(&self) -> Result<(), Error> {
        let entries = [
            ("academic_balance", self.academic_balance),
            ("behavioral_balance", self.behavioral_balance),
            ("special_needs", self.special_needs),
            ("gender_balance", self.gender_balance),
            ("parent_preferences", self.parent_preferences),
            ("teacher_preferences", self.teacher_preferences),
            ("class_size", self.class_size),
        ];
        for (name, value) in entries {
            if !value.is_finite() {
                return Err(Error::InvalidInput(format!(
                    "weight '{name}' must be finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}

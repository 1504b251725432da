//! Annealing configuration.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Configuration for one annealing run.
///
/// # Examples
///
/// ```
/// use class_balance::optimizer::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_max_iterations(5000)
///     .with_initial_temperature(100.0)
///     .with_cooling_rate(0.95)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnealConfig {
    /// Total iteration budget. 0 is a valid degenerate case: no search is
    /// performed and the initial assignment's own score is returned.
    pub max_iterations: usize,

    /// Starting temperature. Higher values accept more worsening moves.
    pub initial_temperature: f64,

    /// Geometric cooling factor in (0, 1): `T ← T · cooling_rate` after
    /// every iteration, accepted or not.
    pub cooling_rate: f64,

    /// Random seed for reproducible runs. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            initial_temperature: 100.0,
            cooling_rate: 0.95,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "initial_temperature must be positive, got {}",
                self.initial_temperature
            )));
        }
        if !self.cooling_rate.is_finite() || self.cooling_rate <= 0.0 || self.cooling_rate >= 1.0 {
            return Err(Error::InvalidInput(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        Ok(())
    }
}

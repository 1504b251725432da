//! Simulated-annealing search driver.
//!
//! Maximizes the weighted assignment score by accepting every improving
//! neighbor and worsening neighbors with probability `exp(delta / T)` under
//! a geometric temperature schedule. The best assignment seen is tracked
//! separately from the current one and only ever replaced on strict
//! improvement, so the returned score never falls below the initial one.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

mod config;
mod runner;

pub use config::AnnealConfig;
pub use runner::{AnnealResult, Annealer};

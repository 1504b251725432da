//! Annealing execution loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::debug;
use rand::Rng;

use super::config::AnnealConfig;
use crate::error::Error;
use crate::models::ClassAssignment;
use crate::neighbor::neighbor;
use crate::problem::BalanceProblem;
use crate::random::create_rng;
use crate::scoring::ScoreBreakdown;

/// Interval (in iterations) between best-score history samples.
const HISTORY_INTERVAL: usize = 100;

/// Result of an annealing run.
#[derive(Debug, Clone)]
pub struct AnnealResult {
    /// The best assignment found.
    pub best: ClassAssignment,

    /// Weighted score of the best assignment.
    pub best_score: f64,

    /// Per-factor score/weight breakdown of the best assignment.
    /// `breakdown.total()` equals `best_score`.
    pub breakdown: ScoreBreakdown,

    /// Iterations actually executed.
    pub iterations: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Temperature when the run stopped.
    pub final_temperature: f64,

    /// Whether the run was cancelled externally. A cancelled run still
    /// carries the best assignment found before the flag was observed.
    pub cancelled: bool,

    /// Best score sampled every [`HISTORY_INTERVAL`] iterations.
    pub score_history: Vec<f64>,
}

/// Executes the simulated-annealing search.
///
/// The loop is single-threaded and CPU-bound; long-running searches belong
/// on a worker thread with a cancellation flag:
///
/// ```no_run
/// use std::sync::atomic::AtomicBool;
/// use std::sync::Arc;
/// # use class_balance::models::{Student, Teacher, TeachingStyle, Weights};
/// # use class_balance::optimizer::{AnnealConfig, Annealer};
/// # use class_balance::problem::BalanceProblem;
/// # use class_balance::random::create_rng;
/// # let students = vec![Student::new("S0", "female"), Student::new("S1", "male")];
/// # let teachers = vec![
/// #     Teacher::new("T0", TeachingStyle::Mixed),
/// #     Teacher::new("T1", TeachingStyle::Lecture),
/// # ];
/// # let problem = BalanceProblem::new(students, teachers, vec![], vec![], Weights::default()).unwrap();
/// # let initial = problem.initial_assignment(2, &mut create_rng(1)).unwrap();
/// # let config = AnnealConfig::default();
/// let cancel = Arc::new(AtomicBool::new(false));
/// let worker_cancel = Arc::clone(&cancel);
/// let handle = std::thread::spawn(move || {
///     Annealer::run_with_cancel(&problem, &initial, &config, Some(worker_cancel))
/// });
/// // ... later, from the requesting side:
/// // cancel.store(true, std::sync::atomic::Ordering::Relaxed);
/// let result = handle.join().unwrap()?;
/// # Ok::<(), class_balance::error::Error>(())
/// ```
pub struct Annealer;

impl Annealer {
    /// Runs the search to completion.
    pub fn run(
        problem: &BalanceProblem,
        initial: &ClassAssignment,
        config: &AnnealConfig,
    ) -> Result<AnnealResult, Error> {
        Self::run_with_cancel(problem, initial, config, None)
    }

    /// Runs the search with an optional cooperative cancellation flag,
    /// checked once per iteration.
    pub fn run_with_cancel(
        problem: &BalanceProblem,
        initial: &ClassAssignment,
        config: &AnnealConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AnnealResult, Error> {
        config.validate()?;
        if initial.class_count() < 2 {
            return Err(Error::DegenerateSearch(format!(
                "swap moves need at least 2 classes, assignment has {}",
                initial.class_count()
            )));
        }
        problem.check_assignment(initial)?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let mut current = initial.clone();
        let mut current_score = problem.score(&current);
        let mut best = current.clone();
        let mut best_score = current_score;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cancelled = false;

        let mut score_history = vec![best_score];

        debug!(
            "annealing {} students over {} classes: {} iterations, T0 {}, cooling {}",
            current.student_count(),
            current.class_count(),
            config.max_iterations,
            config.initial_temperature,
            config.cooling_rate
        );

        for _ in 0..config.max_iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let candidate = neighbor(&current, &mut rng);
            let candidate_score = problem.score(&candidate);
            let delta = candidate_score - current_score;

            // Metropolis acceptance for maximization.
            let accept = if delta > 0.0 {
                improving_moves += 1;
                true
            } else if temperature > 0.0 {
                rng.random_range(0.0..1.0) < (delta / temperature).exp()
            } else {
                false
            };

            if accept {
                current = candidate;
                current_score = candidate_score;
                accepted_moves += 1;

                if current_score > best_score {
                    best = current.clone();
                    best_score = current_score;
                }
            }

            // Cool every iteration, accepted or not.
            temperature *= config.cooling_rate;
            iterations += 1;

            if iterations.is_multiple_of(HISTORY_INTERVAL) {
                score_history.push(best_score);
            }
        }

        if score_history
            .last()
            .is_none_or(|&last| (last - best_score).abs() > 1e-15)
        {
            score_history.push(best_score);
        }

        debug!(
            "annealing finished: score {best_score:.6} after {iterations} iterations \
             ({accepted_moves} accepted, {improving_moves} improving, cancelled: {cancelled})"
        );

        let breakdown = problem.breakdown(&best);
        Ok(AnnealResult {
            best,
            best_score,
            breakdown,
            iterations,
            accepted_moves,
            improving_moves,
            final_temperature: temperature,
            cancelled,
            score_history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ParentPreference, PeerRelation, Student, Teacher, TeachingStyle, Weights,
    };

    fn leveled_roster() -> Vec<Student> {
        // 10 students at level 4, 10 at level 1, alternating genders.
        (0..20)
            .map(|i| {
                Student::new(
                    format!("S{i}"),
                    if i % 2 == 0 { "female" } else { "male" },
                )
                .with_academic_level(if i < 10 { 4 } else { 1 })
            })
            .collect()
    }

    fn two_teachers() -> Vec<Teacher> {
        vec![
            Teacher::new("T0", TeachingStyle::Mixed),
            Teacher::new("T1", TeachingStyle::Lecture),
        ]
    }

    fn academic_only_problem() -> BalanceProblem {
        BalanceProblem::new(
            leveled_roster(),
            two_teachers(),
            vec![],
            vec![],
            Weights::zero().with_academic_balance(1.0),
        )
        .unwrap()
    }

    #[test]
    fn test_zero_iterations_scores_initial() {
        let problem = academic_only_problem();
        let initial = problem
            .initial_assignment(2, &mut create_rng(1))
            .unwrap();
        let config = AnnealConfig::default().with_max_iterations(0).with_seed(1);

        let result = Annealer::run(&problem, &initial, &config).unwrap();
        assert_eq!(result.iterations, 0);
        assert_eq!(result.best, initial);
        assert!((result.best_score - problem.score(&initial)).abs() < 1e-12);
        assert!(!result.cancelled);
    }

    #[test]
    fn test_degenerate_search_rejected() {
        let problem = academic_only_problem();
        let initial = problem
            .initial_assignment(1, &mut create_rng(1))
            .unwrap();
        let err = Annealer::run(&problem, &initial, &AnnealConfig::default()).unwrap_err();
        assert!(matches!(err, Error::DegenerateSearch(_)));
    }

    #[test]
    fn test_mismatched_assignment_rejected() {
        let problem = academic_only_problem();
        let other = BalanceProblem::new(
            vec![Student::new("X", "female")],
            two_teachers(),
            vec![],
            vec![],
            Weights::default(),
        )
        .unwrap();
        let initial = other.initial_assignment(2, &mut create_rng(1)).unwrap();
        let err = Annealer::run(&problem, &initial, &AnnealConfig::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_out_of_roster_assignment_rejected() {
        // An assignment deserialized from a client can carry indices the
        // rosters don't back; entry validation must catch it before the
        // scoring pass indexes with it.
        let problem = BalanceProblem::new(
            vec![Student::new("S0", "female")],
            two_teachers(),
            vec![],
            vec![],
            Weights::default(),
        )
        .unwrap();
        let bogus: ClassAssignment =
            serde_json::from_str(r#"{"class_of":[7],"teacher_of":[0,1]}"#).unwrap();
        let err = Annealer::run(&problem, &bogus, &AnnealConfig::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let problem = academic_only_problem();
        let initial = problem
            .initial_assignment(2, &mut create_rng(1))
            .unwrap();
        let config = AnnealConfig::default().with_cooling_rate(1.5);
        assert!(matches!(
            Annealer::run(&problem, &initial, &config),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_search_never_regresses() {
        let problem = BalanceProblem::new(
            leveled_roster(),
            two_teachers(),
            vec![
                ParentPreference::new("S0").with_preferred_teacher("T1"),
                ParentPreference::new("S3").with_peer("S4", PeerRelation::Together),
            ],
            vec![],
            Weights::default(),
        )
        .unwrap();
        let initial = problem
            .initial_assignment(2, &mut create_rng(8))
            .unwrap();
        let initial_score = problem.score(&initial);

        let config = AnnealConfig::default().with_max_iterations(500).with_seed(8);
        let result = Annealer::run(&problem, &initial, &config).unwrap();
        assert!(
            result.best_score >= initial_score - 1e-12,
            "best {} regressed below initial {}",
            result.best_score,
            initial_score
        );
    }

    #[test]
    fn test_reproducible_with_seed() {
        let problem = academic_only_problem();
        let initial = problem
            .initial_assignment(2, &mut create_rng(21))
            .unwrap();
        let config = AnnealConfig::default()
            .with_max_iterations(300)
            .with_seed(21);

        let a = Annealer::run(&problem, &initial, &config).unwrap();
        let b = Annealer::run(&problem, &initial, &config).unwrap();
        assert_eq!(a.best, b.best);
        assert!((a.best_score - b.best_score).abs() < 1e-15);
        assert_eq!(a.accepted_moves, b.accepted_moves);
    }

    #[test]
    fn test_cancellation_returns_best_so_far() {
        let problem = academic_only_problem();
        let initial = problem
            .initial_assignment(2, &mut create_rng(2))
            .unwrap();
        let config = AnnealConfig::default().with_seed(2);

        // Flag set before the run: cancellation observed on iteration one.
        let cancel = Arc::new(AtomicBool::new(true));
        let result =
            Annealer::run_with_cancel(&problem, &initial, &config, Some(cancel)).unwrap();
        assert!(result.cancelled);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.best, initial);
    }

    #[test]
    fn test_breakdown_matches_best_score() {
        let problem = academic_only_problem();
        let initial = problem
            .initial_assignment(2, &mut create_rng(4))
            .unwrap();
        let config = AnnealConfig::default().with_max_iterations(200).with_seed(4);

        let result = Annealer::run(&problem, &initial, &config).unwrap();
        assert!((result.breakdown.total() - result.best_score).abs() < 1e-12);
    }

    #[test]
    fn test_score_history_non_decreasing() {
        let problem = academic_only_problem();
        let initial = problem
            .initial_assignment(2, &mut create_rng(6))
            .unwrap();
        let config = AnnealConfig::default()
            .with_max_iterations(1000)
            .with_seed(6);

        let result = Annealer::run(&problem, &initial, &config).unwrap();
        for window in result.score_history.windows(2) {
            assert!(
                window[1] >= window[0] - 1e-12,
                "best-score history must be non-decreasing: {:?}",
                result.score_history
            );
        }
    }

    #[test]
    fn test_convergence_on_two_level_roster() {
        // 10 level-4 and 10 level-1 students, academic balance only. The
        // inverse-variance objective peaks at 1.0 when each class is uniform
        // in level, so a long run must beat the fully mixed 5/5 split and
        // approach uniform classes.
        let problem = academic_only_problem();
        let initial = problem
            .initial_assignment(2, &mut create_rng(42))
            .unwrap();
        let initial_score = problem.score(&initial);

        let config = AnnealConfig::default()
            .with_max_iterations(1000)
            .with_initial_temperature(100.0)
            .with_cooling_rate(0.95)
            .with_seed(42);
        let result = Annealer::run(&problem, &initial, &config).unwrap();

        // A forced 5/5 mix per class: variance 2.25 each → score 1/3.25.
        let mut mixed = initial.clone();
        for s in 0..20 {
            mixed.reassign(s, s % 2);
        }
        let mixed_score = problem.score(&mixed);
        assert!((mixed_score - 1.0 / 3.25).abs() < 1e-10);

        assert!(result.best_score >= initial_score - 1e-12);
        assert!(
            result.best_score > mixed_score,
            "expected {} to beat the fully mixed score {}",
            result.best_score,
            mixed_score
        );
        assert!(
            result.best_score > 0.9,
            "expected near-uniform classes, got score {}",
            result.best_score
        );
    }
}

//! Class-assignment optimizer.
//!
//! Partitions a student roster into a fixed number of teacher-bound classes
//! by simulated annealing, balancing seven weighted factors: academic level,
//! behavior, special-needs distribution, gender mix, parent preferences,
//! teacher preferences, and class size.
//!
//! # Architecture
//!
//! - [`models`] — students, teachers, preference/survey records, weights,
//!   and the index-based [`models::ClassAssignment`] solution type.
//! - [`problem`] — [`problem::BalanceProblem`] validates rosters once,
//!   resolves identifiers to indices, and builds the initial assignment.
//! - [`scoring`] — the seven pure sub-scores and the per-factor
//!   [`scoring::ScoreBreakdown`] report.
//! - [`optimizer`] — the annealing loop with seedable randomness and a
//!   cooperative cancellation flag.
//!
//! The whole computation is in-memory and single-threaded; concurrent runs
//! (one per grade level, say) share nothing as long as each gets its own
//! seed.
//!
//! # Example
//!
//! ```
//! use class_balance::models::{Student, Teacher, TeachingStyle, Weights};
//! use class_balance::optimizer::{AnnealConfig, Annealer};
//! use class_balance::problem::BalanceProblem;
//! use class_balance::random::create_rng;
//!
//! let students: Vec<Student> = (0..12)
//!     .map(|i| {
//!         Student::new(format!("S{i}"), if i % 2 == 0 { "female" } else { "male" })
//!             .with_academic_level((i % 4 + 1) as u8)
//!     })
//!     .collect();
//! let teachers = vec![
//!     Teacher::new("T0", TeachingStyle::Mixed),
//!     Teacher::new("T1", TeachingStyle::HandsOn),
//! ];
//!
//! let problem = BalanceProblem::new(students, teachers, vec![], vec![], Weights::default())?;
//! let initial = problem.initial_assignment(2, &mut create_rng(42))?;
//! let config = AnnealConfig::default().with_max_iterations(500).with_seed(42);
//!
//! let result = Annealer::run(&problem, &initial, &config)?;
//! for group in problem.class_groups(&result.best) {
//!     println!("{}: {} students", group.teacher_id, group.student_ids.len());
//! }
//! for (name, factor) in result.breakdown.factors() {
//!     println!("{name}: {:.3} (weight {})", factor.score, factor.weight);
//! }
//! # Ok::<(), class_balance::error::Error>(())
//! ```

pub mod error;
pub mod models;
pub mod optimizer;
pub mod problem;
pub mod random;
pub mod scoring;

mod neighbor;

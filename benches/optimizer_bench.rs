//! Criterion benchmarks for the class-assignment optimizer.
//!
//! Uses synthetic rosters to measure the scoring pass and the full
//! annealing loop across roster sizes.

use class_balance::models::{
    ParentPreference, PeerRelation, Student, Teacher, TeachingStyle, Weights,
};
use class_balance::optimizer::{AnnealConfig, Annealer};
use class_balance::problem::BalanceProblem;
use class_balance::random::create_rng;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const STYLES: [TeachingStyle; 4] = [
    TeachingStyle::Mixed,
    TeachingStyle::Lecture,
    TeachingStyle::HandsOn,
    TeachingStyle::VisualAids,
];

fn synthetic_problem(students: usize, classes: usize) -> BalanceProblem {
    let roster: Vec<Student> = (0..students)
        .map(|i| {
            Student::new(
                format!("S{i}"),
                if i % 2 == 0 { "female" } else { "male" },
            )
            .with_academic_level((i % 4 + 1) as u8)
            .with_behavior_score((i % 3 + 1) as u8)
            .with_special_needs(i % 7 == 0)
        })
        .collect();
    let teachers: Vec<Teacher> = (0..classes)
        .map(|i| Teacher::new(format!("T{i}"), STYLES[i % STYLES.len()]))
        .collect();
    // One preference record per third student keeps the satisfaction pass busy.
    let prefs: Vec<ParentPreference> = (0..students)
        .step_by(3)
        .map(|i| {
            ParentPreference::new(format!("S{i}"))
                .with_preferred_teacher(format!("T{}", i % classes))
                .with_peer(format!("S{}", (i + 1) % students), PeerRelation::Together)
        })
        .collect();

    BalanceProblem::new(roster, teachers, prefs, vec![], Weights::default()).unwrap()
}

fn bench_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("scoring_pass");
    for &n in &[60usize, 120, 240] {
        let classes = n / 30;
        let problem = synthetic_problem(n, classes);
        let assignment = problem
            .initial_assignment(classes, &mut create_rng(42))
            .unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(problem.score(black_box(&assignment))));
        });
    }
    group.finish();
}

fn bench_anneal(c: &mut Criterion) {
    let mut group = c.benchmark_group("anneal_1000_iters");
    group.sample_size(10);
    for &n in &[60usize, 120, 240] {
        let classes = n / 30;
        let problem = synthetic_problem(n, classes);
        let initial = problem
            .initial_assignment(classes, &mut create_rng(42))
            .unwrap();
        let config = AnnealConfig::default()
            .with_max_iterations(1000)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| Annealer::run(&problem, &initial, &config).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scoring, bench_anneal);
criterion_main!(benches);

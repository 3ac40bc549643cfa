// ABOUTME: Criterion benchmarks for the health risk engine
// ABOUTME: Measures single questionnaire scoring and parallel batch evaluation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthcare Portal Contributors

//! Criterion benchmarks for risk scoring.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use healthcare_portal::models::{ExerciseLevel, Gender, HealthMetrics, SmokingStatus};
use healthcare_portal::RiskEngine;

const BATCH_SIZES: [usize; 3] = [10, 100, 1000];

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn generate_questionnaires(count: usize) -> Vec<HealthMetrics> {
    (0..count)
        .map(|index| {
            let i = index as i32;
            HealthMetrics {
                age: 20 + (i * 7) % 60,
                gender: if index % 2 == 0 {
                    Gender::Female
                } else {
                    Gender::Male
                },
                height: 150 + (i * 3) % 45,
                weight: 45 + (i * 11) % 70,
                blood_pressure: format!("{}/{}", 105 + (i * 13) % 50, 70 + (i * 5) % 25),
                blood_sugar: 80 + (i * 17) % 70,
                cholesterol: 160 + (i * 19) % 100,
                heart_rate: 50 + (i * 23) % 60,
                smoking: match index % 3 {
                    0 => SmokingStatus::None,
                    1 => SmokingStatus::Former,
                    _ => SmokingStatus::Current,
                },
                exercise: match index % 3 {
                    0 => ExerciseLevel::Regular,
                    1 => ExerciseLevel::Occasional,
                    _ => ExerciseLevel::None,
                },
                medical_history: String::new(),
                medications: String::new(),
            }
        })
        .collect()
}

fn bench_evaluate(c: &mut Criterion) {
    let engine = RiskEngine::new();
    let questionnaires = generate_questionnaires(2);

    let mut group = c.benchmark_group("evaluate");
    group.bench_function("healthy", |b| {
        b.iter(|| engine.evaluate(black_box(&questionnaires[0])));
    });
    group.bench_function("many_factors", |b| {
        b.iter(|| engine.evaluate(black_box(&questionnaires[1])));
    });
    group.finish();
}

fn bench_evaluate_batch(c: &mut Criterion) {
    let engine = RiskEngine::new();

    let mut group = c.benchmark_group("evaluate_batch");
    for size in BATCH_SIZES {
        let batch = generate_questionnaires(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("parallel", size), &batch, |b, batch| {
            b.iter(|| engine.evaluate_batch(black_box(batch)));
        });
        group.bench_with_input(BenchmarkId::new("sequential", size), &batch, |b, batch| {
            b.iter(|| {
                batch
                    .iter()
                    .map(|metrics| engine.evaluate(metrics))
                    .collect::<Vec<_>>()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_evaluate_batch);
criterion_main!(benches);

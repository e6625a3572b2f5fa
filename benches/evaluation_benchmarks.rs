//! Benchmarks for the per-frame evaluation pipeline

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use shoulder_rehab::exercise::ExerciseMode;
use shoulder_rehab::geometry::angle_from_vertical;
use shoulder_rehab::landmarks::{Landmark, LandmarkFrame};
use shoulder_rehab::pipeline::FrameEvaluator;

fn synthetic_frames(count: usize) -> Vec<LandmarkFrame> {
    (0..count)
        .map(|i| {
            let t = i as f64 * 0.1;
            let shoulder = Landmark::new(0.5, 0.4, 0.0);
            let elbow = Landmark::new(0.5 + 0.2 * t.cos(), 0.4 + 0.2 * t.sin(), 0.05 * t.sin());
            LandmarkFrame::from_right_arm(shoulder, elbow)
        })
        .collect()
}

fn benchmark_geometry(c: &mut Criterion) {
    c.bench_function("angle_from_vertical", |b| {
        b.iter(|| angle_from_vertical(black_box((0.5, 0.4)), black_box((0.7, 0.3))));
    });
}

fn benchmark_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let frames = synthetic_frames(100);

    for window_size in [1, 5, 30] {
        group.bench_with_input(
            BenchmarkId::new("evaluate_100_frames", window_size),
            &window_size,
            |b, &window_size| {
                b.iter(|| {
                    let mut evaluator =
                        FrameEvaluator::new(ExerciseMode::Abduction, vec![90.0, 180.0], 10.0, 1.2, window_size);
                    for frame in &frames {
                        black_box(evaluator.evaluate(Some(black_box(frame))));
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_geometry, benchmark_pipeline);
criterion_main!(benches);

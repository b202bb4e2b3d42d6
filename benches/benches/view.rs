// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use loupe_view::{
    AnimationStart, AnimationStep, BoundsClamp, FitSolver, ScaleLimits, TransformAnimator,
    ViewParam,
};

const MEDIA: Size = Size::new(4_000.0, 3_000.0);
const CONTAINER: Size = Size::new(1_280.0, 720.0);

fn bench_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("view/fit");
    let solver = FitSolver::new(ScaleLimits::playable());

    for angle in [0.0_f64, 0.3, core::f64::consts::FRAC_PI_2] {
        group.bench_with_input(BenchmarkId::from_parameter(angle), &angle, |b, &angle| {
            b.iter(|| black_box(solver.solve(black_box(MEDIA), black_box(CONTAINER), angle)));
        });
    }

    group.finish();
}

fn bench_clamp(c: &mut Criterion) {
    let mut group = c.benchmark_group("view/clamp");
    let solver = FitSolver::new(ScaleLimits::playable());
    let clamp = BoundsClamp::new(MEDIA);

    for angle in [0.0_f64, 0.3] {
        let Some(fit) = solver.solve(MEDIA, CONTAINER, angle) else {
            continue;
        };
        // Pan far enough that both axes need pulling back.
        let candidate = ViewParam {
            scale: fit.scale * 3.0,
            x: fit.x + 5_000.0,
            y: fit.y - 5_000.0,
            ..fit
        };
        group.bench_with_input(BenchmarkId::from_parameter(angle), &candidate, |b, &candidate| {
            b.iter(|| black_box(clamp.clamp(black_box(candidate), fit)));
        });
    }

    group.finish();
}

fn bench_animation(c: &mut Criterion) {
    let mut group = c.benchmark_group("view/animate_to_completion");
    let pivot = Point::new(CONTAINER.width / 2.0, CONTAINER.height / 2.0);
    let from = ViewParam::new(0.18, 0.0, 90.0, 0.0);

    let cases = [
        ("zoom", ViewParam::new(1.0, -1_000.0, -800.0, 0.0)),
        ("quarter_turn", ViewParam::new(0.24, 1_000.0, -120.0, core::f64::consts::FRAC_PI_2)),
    ];
    for (name, to) in cases {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut animator = TransformAnimator::default();
                let mut current = from;
                let AnimationStart::Scheduled(mut generation) = animator.animate(&current, to) else {
                    return current;
                };
                while let AnimationStep::Continue(next) = animator.tick(generation, &mut current, pivot) {
                    generation = next;
                }
                black_box(current)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fit, bench_clamp, bench_animation);
criterion_main!(benches);

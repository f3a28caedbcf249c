use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use geo_viewport::{
    CaptureFlag, ElementPointer, Envelope, InteractionMode, PixelRect,
    PointerInteractionController, ViewportContext, ViewportOptions, ViewportTransform,
};
use glam::DVec2;
use std::hint::black_box;

fn build_transform() -> ViewportTransform {
    let source = Envelope::new(3_500_000.0, 5_500_000.0, 3_520_000.0, 5_515_000.0)
        .expect("Envelope ungültig");
    ViewportTransform::new(source, PixelRect::from_size(1920.0, 1080.0))
        .expect("Transformation ungültig")
}

fn build_screen_points(count: usize) -> Vec<DVec2> {
    (0..count)
        .map(|i| {
            let x = (i % 1920) as f64 + 0.37;
            let y = ((i * 7) % 1080) as f64 + 0.63;
            DVec2::new(x, y)
        })
        .collect()
}

fn bench_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_round_trip");
    let transform = build_transform();

    for &count in &[1_000usize, 100_000usize] {
        let points = build_screen_points(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &points, |b, points| {
            b.iter(|| {
                let mut acc = DVec2::ZERO;
                for &p in points {
                    acc += transform.to_screen(transform.to_geo(black_box(p)));
                }
                black_box(acc)
            })
        });
    }

    group.finish();
}

fn bench_transform_construction(c: &mut Criterion) {
    let source = Envelope::new(0.0, 0.0, 50.0, 50.0).expect("Envelope ungültig");
    let destination = PixelRect::from_size(800.0, 600.0);

    c.bench_function("transform_new", |b| {
        b.iter(|| ViewportTransform::new(black_box(source), black_box(destination)))
    });
}

fn bench_pan_session(c: &mut Criterion) {
    let transform = build_transform();
    let options = ViewportOptions::default();
    let moves = build_screen_points(200);

    c.bench_function("pan_session_200_moves", |b| {
        b.iter(|| {
            let mut controller = PointerInteractionController::new();
            let mut capture = CaptureFlag::default();
            let mut ctx = ViewportContext {
                mode: InteractionMode::Pan,
                transform: &transform,
                options: &options,
                capture: &mut capture,
            };
            let mut events = Vec::with_capacity(1);

            controller.pointer_down(&mut ctx, &ElementPointer::at(960.0, 540.0));
            for &p in &moves {
                controller.pointer_move(&black_box(p));
            }
            controller.pointer_up(&mut ctx, &ElementPointer::at(1000.0, 500.0), &mut events);
            black_box(events)
        })
    });
}

criterion_group!(
    benches,
    bench_round_trip,
    bench_transform_construction,
    bench_pan_session
);
criterion_main!(benches);

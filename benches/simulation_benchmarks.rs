//! 帧更新与绑定校验性能基准测试

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec2;
use raybind::bindings::{raylib, NativeSignature, RAYLIB_CALLS};
use raybind::core::SimulationState;
use raybind::platform::{Point2D, RgbaColor};

fn bench_simulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation");
    let bounds = Vec2::new(800.0, 600.0);

    group.bench_function("advance_1000_frames", |b| {
        b.iter(|| {
            let mut state = SimulationState::new(Vec2::new(400.0, 300.0), Vec2::new(3.0, 3.0));
            for _ in 0..1000 {
                black_box(state.advance(bounds, false));
            }
            black_box(state)
        });
    });

    group.finish();
}

fn bench_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");

    group.bench_function("build", |b| {
        b.iter(|| black_box(raylib::registry().map(|r| r.len()).unwrap_or(0)));
    });

    type DrawCircleV = unsafe extern "C" fn(Point2D, f32, RgbaColor);
    let descriptor = RAYLIB_CALLS
        .iter()
        .find(|d| d.name == "DrawCircleV")
        .copied();

    group.bench_function("shape_check", |b| {
        b.iter(|| black_box(descriptor.map(|d| d.matches::<DrawCircleV>())));
    });

    group.bench_function("describe", |b| {
        b.iter(|| black_box(<DrawCircleV as NativeSignature>::describe()));
    });

    group.finish();
}

criterion_group!(benches, bench_simulation, bench_registry);
criterion_main!(benches);

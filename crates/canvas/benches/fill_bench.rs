use canvas::{flood_fill, Rgba, Surface};
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use glam::IVec2;

fn bench_flood_fill(c: &mut Criterion) {
    // Fresh surface per iteration: repeating the fill on an already filled
    // canvas would measure the same-color early-out instead of the fill.
    c.bench_function("flood_fill_1700x900", |b| {
        b.iter_batched(
            || Surface::new(1700, 900, Rgba::WHITE).unwrap(),
            |mut surface| {
                flood_fill(&mut surface, IVec2::new(850, 450), Rgba::BLACK);
                surface
            },
            BatchSize::LargeInput,
        );
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let surface = Surface::new(1700, 900, Rgba::WHITE).unwrap();
    c.bench_function("snapshot_1700x900", |b| {
        b.iter(|| surface.snapshot());
    });
}

criterion_group!(benches, bench_flood_fill, bench_snapshot);
criterion_main!(benches);

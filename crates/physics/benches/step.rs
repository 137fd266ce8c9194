use criterion::{criterion_group, criterion_main, Criterion};
use physics::{advance, ContactTest, Simulation, World};

fn bench_advance(c: &mut Criterion) {
    let sim = Simulation::demo();
    let sphere = *sim.sphere();
    for (name, test) in [
        ("advance_clamped", ContactTest::ClampedClosestPoint),
        ("advance_minkowski", ContactTest::MinkowskiApprox),
        ("advance_plane", ContactTest::PlaneSignedDistance),
    ] {
        let world = World::demo().with_contact_test(test);
        c.bench_function(name, |b| b.iter(|| advance(sphere, &world).unwrap()));
    }
}

fn bench_demo_run(c: &mut Criterion) {
    c.bench_function("demo_run_1000", |b| {
        b.iter(|| {
            let mut sim = Simulation::demo();
            sim.run(1000).unwrap();
        })
    });
}

criterion_group!(benches, bench_advance, bench_demo_run);
criterion_main!(benches);

use arbiter2d::{ContactManifold, ContactPoint, PhysicsWorld, RigidBody, SolverConfig, Vec2};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

// --- Helper for building a column of boxes resting on static ground ---
fn build_stack(height: usize, iterations: usize) -> (PhysicsWorld, Vec<ContactManifold>) {
    let mut world = PhysicsWorld::new(SolverConfig {
        velocity_iterations: iterations,
        ..SolverConfig::default()
    })
    .expect("valid config");

    let ground = world.add_body(RigidBody::new_static(Vec2::new(0.0, -0.5)));
    let mut below = ground;
    let mut manifolds = Vec::with_capacity(height);

    for i in 0..height {
        let y = i as f64;
        let body = world.add_body(
            RigidBody::new_dynamic(1.0, 1.0 / 6.0).with_position(Vec2::new(0.0, y + 0.5)),
        );
        // Two points per manifold, like a box face lying on another.
        manifolds.push(
            ContactManifold::new(body, below, Vec2::DOWN)
                .with_point(ContactPoint::new(Vec2::new(-0.5, y), Vec2::new(-0.5, y)))
                .with_point(ContactPoint::new(Vec2::new(0.5, y), Vec2::new(0.5, y))),
        );
        below = body;
    }
    (world, manifolds)
}

fn bench_box_stack(c: &mut Criterion) {
    let mut group = c.benchmark_group("box_stack");

    for height in [10, 100, 500].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(height), height, |b, &n| {
            b.iter(|| {
                let (mut world, manifolds) = build_stack(black_box(n), 8);
                let dt = 1.0 / 60.0;
                for _ in 0..30 {
                    world.step(black_box(dt), &manifolds).expect("valid step");
                }
            });
        });
    }
    group.finish();
}

// Solve passes only, on an already warm arbiter set
fn bench_iterations(c: &mut Criterion) {
    let mut group = c.benchmark_group("velocity_iterations");

    for iterations in [1, 8, 32].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(iterations),
            iterations,
            |b, &iters| {
                let (mut world, manifolds) = build_stack(50, iters);
                world.step(1.0 / 60.0, &manifolds).expect("valid step");
                b.iter(|| world.step(black_box(1.0 / 60.0), &manifolds).expect("valid step"));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_box_stack, bench_iterations);
criterion_main!(benches);

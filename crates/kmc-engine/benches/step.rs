//! Benchmark of the per-step cost. The classification rescan is
//! O(L^2) and dominates; this tracks how it scales with lattice size.

use criterion::{criterion_group, criterion_main, Criterion};
use kmc_engine::{RunConfig, Simulation};

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");
    for &length in &[16u32, 32, 64] {
        let config = RunConfig {
            lattice_length: length,
            steps: 0,
            seed: 7,
            absorption_rate: 4.0,
            desorption_rate: 2.0,
            interaction_strength: 0.8,
        };
        let mut sim = Simulation::new(config).expect("valid bench config");
        group.bench_function(format!("L{length}"), |b| {
            b.iter(|| sim.step().expect("bench rates are non-degenerate"))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_step);
criterion_main!(benches);

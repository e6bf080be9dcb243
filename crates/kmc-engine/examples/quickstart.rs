//! kmc quickstart — the canonical sodium-on-foil run.
//!
//! Demonstrates:
//!   1. Building a RunConfig (the default is the canonical parameter set)
//!   2. Constructing a Simulation and stepping it
//!   3. Reading per-step outcomes and timing metrics
//!   4. Consuming the coverage trajectory (the plotting collaborator's input)
//!   5. Rendering the final lattice as ASCII
//!
//! Run with:
//!   cargo run --example quickstart

use kmc_core::Site;
use kmc_engine::{RunConfig, Simulation};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== kmc quickstart ===\n");

    // 1. The canonical parameter set: 32x32 lattice, 5000 steps,
    //    ra = 4, rd = 2, alpha = 1 (non-interacting).
    let config = RunConfig::default();
    println!(
        "Lattice: {l}x{l} periodic, {steps} steps, seed {seed}",
        l = config.lattice_length,
        steps = config.steps,
        seed = config.seed,
    );
    println!(
        "Rates: absorption={}, desorption={}, alpha={}\n",
        config.absorption_rate, config.desorption_rate, config.interaction_strength,
    );
    let steps = config.steps;
    let length = config.lattice_length;

    // 2. Build and run, reporting progress every 500 steps.
    let mut sim = Simulation::new(config)?;
    println!("Running...");
    for _ in 0..steps {
        let outcome = sim.step()?;
        let step = sim.current_step();
        if step % 500 == 0 {
            println!(
                "  step {:>4}: coverage={:.4}  last event={:<12}  classify={}us",
                step,
                outcome.coverage,
                outcome.event.class.to_string(),
                outcome.metrics.classify_us,
            );
        }
    }

    // 3. The trajectory is what a plotting collaborator would consume.
    let trajectory = sim.trajectory();
    let tail = &trajectory.samples()[trajectory.len() - 1000..];
    let mean: f64 = tail.iter().sum::<f64>() / tail.len() as f64;
    println!("\nFinal coverage:        {:.4}", trajectory.final_coverage().unwrap_or(0.0));
    println!("Mean over last 1000:   {mean:.4}");
    println!("Detailed balance says: {:.4}", 4.0 / (4.0 + 2.0));

    // 4. Render the final lattice: '#' occupied, '.' empty.
    println!("\nFinal lattice:");
    for row in 1..=length {
        let line: String = (1..=length)
            .map(|col| {
                if sim.lattice().occupied(Site::new(row, col)) {
                    '#'
                } else {
                    '.'
                }
            })
            .collect();
        println!("  {line}");
    }

    println!("\nDone.");
    Ok(())
}

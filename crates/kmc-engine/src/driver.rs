//! The simulation driver: the strictly sequential KMC loop.
//!
//! [`Simulation`] owns the lattice, the rate table, the RNG, and the
//! coverage trajectory, and advances them one
//! classify → select → apply → record cycle at a time. The loop is
//! intrinsically serial: event probabilities depend on the full
//! current classification, so each step must see the lattice exactly
//! as the previous step's transition left it. No reordering or
//! batching is possible.

use std::error::Error;
use std::fmt;
use std::time::Instant;

use kmc_core::{RateTable, SelectError};
use kmc_lattice::Lattice;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::apply::apply_transition;
use crate::classify::Classification;
use crate::config::{ConfigError, RunConfig};
use crate::metrics::StepMetrics;
use crate::select::{select_event, SelectedEvent};

// ── StepError ──────────────────────────────────────────────────────

/// Error returned from [`Simulation::step()`].
///
/// Wraps the underlying [`SelectError`] with the step at which it
/// occurred. Step errors are logic or configuration defects, never
/// transient; callers should abort the run rather than retry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepError {
    /// Zero-based index of the failing step.
    pub step: u64,
    /// The underlying selection error.
    pub kind: SelectError,
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {}: {}", self.step, self.kind)
    }
}

impl Error for StepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.kind)
    }
}

// ── Trajectory ─────────────────────────────────────────────────────

/// The coverage trajectory of a run.
///
/// One fractional coverage value in `[0, 1]` per completed step, in
/// step order. Owned by the driver; external collaborators (plotting,
/// reporting) consume it read-only.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trajectory {
    samples: Vec<f64>,
}

impl Trajectory {
    /// The recorded coverage samples, in step order.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Number of completed steps.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no step has completed yet.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Coverage after the final step, if any step completed.
    pub fn final_coverage(&self) -> Option<f64> {
        self.samples.last().copied()
    }

    fn push(&mut self, coverage: f64) {
        self.samples.push(coverage);
    }
}

// ── StepOutcome ────────────────────────────────────────────────────

/// Result of a successful step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepOutcome {
    /// The event that was applied.
    pub event: SelectedEvent,
    /// Fractional coverage after the transition.
    pub coverage: f64,
    /// Phase timings for this step.
    pub metrics: StepMetrics,
}

// ── Simulation ─────────────────────────────────────────────────────

/// Single-threaded KMC simulation driver.
///
/// Owns all run state. Constructed from a validated [`RunConfig`];
/// [`step()`](Simulation::step) advances one event,
/// [`run()`](Simulation::run) advances to the configured step count.
/// Identical seed and configuration replay bit-identical trajectories.
pub struct Simulation {
    lattice: Lattice,
    rates: RateTable,
    rng: ChaCha8Rng,
    seed: u64,
    steps: u64,
    current_step: u64,
    trajectory: Trajectory,
    last_metrics: StepMetrics,
}

impl Simulation {
    /// Construct a simulation from `config`.
    ///
    /// Validates the configuration, builds the all-empty lattice and
    /// the rate table, and seeds the RNG. Consumes the config.
    pub fn new(config: RunConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let lattice = Lattice::new(config.lattice_length)?;
        Ok(Self {
            lattice,
            rates: RateTable::new(
                config.absorption_rate,
                config.desorption_rate,
                config.interaction_strength,
            ),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            seed: config.seed,
            steps: config.steps,
            current_step: 0,
            trajectory: Trajectory::default(),
            last_metrics: StepMetrics::default(),
        })
    }

    /// Execute one classify → select → apply → record cycle.
    ///
    /// Steps past the configured count are permitted; `steps` only
    /// bounds [`run()`](Simulation::run).
    pub fn step(&mut self) -> Result<StepOutcome, StepError> {
        let step = self.current_step;
        let t0 = Instant::now();

        let classification = Classification::scan(&self.lattice);
        let t1 = Instant::now();

        let event = select_event(&classification, &self.rates, &mut self.rng)
            .map_err(|kind| StepError { step, kind })?;
        let t2 = Instant::now();

        apply_transition(&mut self.lattice, event);
        let coverage = self.lattice.coverage();
        self.trajectory.push(coverage);
        self.current_step += 1;
        let t3 = Instant::now();

        let metrics = StepMetrics {
            classify_us: (t1 - t0).as_micros() as u64,
            select_us: (t2 - t1).as_micros() as u64,
            apply_us: (t3 - t2).as_micros() as u64,
            total_us: (t3 - t0).as_micros() as u64,
        };
        self.last_metrics = metrics;

        Ok(StepOutcome {
            event,
            coverage,
            metrics,
        })
    }

    /// Run until the configured step count and return the trajectory.
    ///
    /// Strictly sequential; stops at the first step error. Already
    /// completed steps are not repeated, so `run()` after manual
    /// [`step()`](Simulation::step) calls finishes the remainder.
    pub fn run(&mut self) -> Result<&Trajectory, StepError> {
        while self.current_step < self.steps {
            self.step()?;
        }
        Ok(&self.trajectory)
    }

    /// The lattice in its current state.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// The trajectory recorded so far.
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Consume the simulation, yielding the trajectory.
    pub fn into_trajectory(self) -> Trajectory {
        self.trajectory
    }

    /// Number of completed steps.
    pub fn current_step(&self) -> u64 {
        self.current_step
    }

    /// The seed the RNG was last seeded with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Timings of the most recent step.
    pub fn last_metrics(&self) -> StepMetrics {
        self.last_metrics
    }

    /// Reset to an all-empty lattice, an empty trajectory, and a
    /// fresh RNG stream seeded from `seed`.
    pub fn reset(&mut self, seed: u64) {
        let length = self.lattice.length();
        // Length was validated at construction.
        self.lattice = Lattice::new(length).expect("length validated at construction");
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self.seed = seed;
        self.current_step = 0;
        self.trajectory = Trajectory::default();
        self.last_metrics = StepMetrics::default();
    }
}

impl fmt::Debug for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulation")
            .field("lattice_length", &self.lattice.length())
            .field("seed", &self.seed)
            .field("steps", &self.steps)
            .field("current_step", &self.current_step)
            .field("coverage", &self.lattice.coverage())
            .finish()
    }
}

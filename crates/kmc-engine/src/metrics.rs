//! Per-step timing metrics.

/// Wall-clock timings for the phases of a single KMC step.
///
/// All durations are in microseconds, captured by the driver with
/// `Instant`. Consumers read them from [`StepOutcome`](crate::StepOutcome)
/// or [`Simulation::last_metrics`](crate::Simulation::last_metrics);
/// the classification scan is expected to dominate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Time spent in the classification scan.
    pub classify_us: u64,
    /// Time spent building probabilities and drawing the event.
    pub select_us: u64,
    /// Time spent applying the transition and recording coverage.
    pub apply_us: u64,
    /// Wall-clock time for the entire step.
    pub total_us: u64,
}

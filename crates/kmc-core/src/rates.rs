//! The transition rate table.

use crate::EventClass;

/// Per-class transition rates.
///
/// Absorption carries the bare absorption rate `ra`. Desorption with
/// `k` occupied neighbours carries `rd * alpha^k`, where `alpha` is
/// the near-neighbour interaction strength: `alpha < 1` means
/// neighbours bind the particle (desorption slows), `alpha > 1` means
/// they expel it, and `alpha = 1` is the non-interacting model.
#[derive(Clone, Debug, PartialEq)]
pub struct RateTable {
    rates: [f64; EventClass::COUNT],
}

impl RateTable {
    /// Build the rate table from the three model parameters.
    ///
    /// Pure and infallible. Callers guarantee finite, non-negative
    /// inputs; `RunConfig::validate()` in `kmc-engine` enforces this
    /// before any table is constructed.
    pub fn new(absorption_rate: f64, desorption_rate: f64, interaction_strength: f64) -> Self {
        let mut rates = [0.0; EventClass::COUNT];
        rates[0] = absorption_rate;
        for (neighbours, slot) in rates.iter_mut().skip(1).enumerate() {
            *slot = desorption_rate * interaction_strength.powi(neighbours as i32);
        }
        Self { rates }
    }

    /// The transition rate for `class`.
    pub fn rate(&self, class: EventClass) -> f64 {
        self.rates[class.index()]
    }
}

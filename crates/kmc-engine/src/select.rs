//! Rejection-free event selection.
//!
//! Every step the selector weighs each class by `count * rate`, builds
//! the cumulative probability distribution, and spends exactly two
//! uniform draws: one to pick the class, one to pick a site within it.
//! No proposed event is ever rejected, which is what lets the
//! simulation take one real transition per step regardless of how
//! unbalanced the rates are.
//!
//! Determinism contract: all randomness comes from the caller's
//! [`ChaCha8Rng`], so identical seeds replay identical event
//! sequences.

use kmc_core::{EventClass, RateTable, SelectError, Site};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::classify::Classification;

/// An event chosen by the selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectedEvent {
    /// The chosen event class.
    pub class: EventClass,
    /// The interior site the transition applies to.
    pub site: Site,
}

/// Total transition rate over the snapshot: `sum of count_i * rate_i`.
pub fn total_rate(classification: &Classification, rates: &RateTable) -> f64 {
    EventClass::all()
        .map(|c| classification.count(c) as f64 * rates.rate(c))
        .sum()
}

/// Build the cumulative class probabilities.
///
/// `prob[i]` is the probability that the drawn class index is `<= i`;
/// `prob[5]` equals 1 up to floating-point rounding. Returns
/// [`SelectError::DegenerateState`] when the total rate is zero, so a
/// fully empty lattice with zero absorption rate fails loudly instead
/// of dividing through to NaN.
pub fn cumulative_probabilities(
    classification: &Classification,
    rates: &RateTable,
) -> Result<[f64; EventClass::COUNT], SelectError> {
    let total = total_rate(classification, rates);
    if total <= 0.0 {
        // Rates are validated non-negative, so zero is the only
        // degenerate total.
        return Err(SelectError::DegenerateState);
    }

    let mut prob = [0.0; EventClass::COUNT];
    let mut acc = 0.0;
    for class in EventClass::all() {
        acc += classification.count(class) as f64 * rates.rate(class) / total;
        prob[class.index()] = acc;
    }
    Ok(prob)
}

/// Select the next event: a class weighted by `count * rate`, then a
/// uniformly random site within that class.
///
/// Class selection keeps the reference boundary convention exactly:
/// class 0 iff `r <= prob[0]`, otherwise the smallest `i` with
/// `prob[i-1] < r <= prob[i]`. The strict lower bound makes
/// zero-width intervals (empty or zero-rate classes) unselectable. A
/// rounding residual can still leave `r` above `prob[5]`; that draw
/// falls back to the highest class carrying nonzero weight.
///
/// The site index is `floor(r2 * count)` clamped into
/// `[0, count - 1]`, guarding the `r2 * count == count` edge that
/// floating-point rounding can produce at the upper boundary.
pub fn select_event(
    classification: &Classification,
    rates: &RateTable,
    rng: &mut ChaCha8Rng,
) -> Result<SelectedEvent, SelectError> {
    let prob = cumulative_probabilities(classification, rates)?;
    let r: f64 = rng.random();

    let mut chosen = None;
    if r <= prob[0] {
        chosen = EventClass::from_index(0);
    } else {
        for i in 1..EventClass::COUNT {
            if prob[i - 1] < r && r <= prob[i] {
                chosen = EventClass::from_index(i);
                break;
            }
        }
    }
    let class = match chosen {
        Some(class) => class,
        // r > prob[5]: floating-point residual. Some class carries
        // weight (the total rate was nonzero), so take the last one.
        None => EventClass::all()
            .filter(|&c| classification.count(c) > 0 && rates.rate(c) > 0.0)
            .last()
            .ok_or(SelectError::DegenerateState)?,
    };

    let count = classification.count(class);
    if count == 0 {
        return Err(SelectError::InconsistentClassification { class });
    }

    let r2: f64 = rng.random();
    let index = ((r2 * count as f64).floor() as usize).min(count - 1);
    let site = classification.class_sites(class)[index];

    Ok(SelectedEvent { class, site })
}

#[cfg(test)]
mod tests {
    use super::*;
    use kmc_lattice::Lattice;
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn lattice_with(length: u32, fills: &[(u32, u32)]) -> Lattice {
        let mut lat = Lattice::new(length).unwrap();
        for &(r, c) in fills {
            lat.set_occupancy(Site::new(r, c), true);
        }
        lat
    }

    #[test]
    fn total_rate_weighs_counts_by_rates() {
        let lat = lattice_with(4, &[(2, 2)]);
        let cls = Classification::scan(&lat);
        let rates = RateTable::new(4.0, 2.0, 1.0);
        // 15 empty sites at rate 4, one isolated particle at rate 2.
        assert_eq!(total_rate(&cls, &rates), 15.0 * 4.0 + 2.0);
    }

    #[test]
    fn zero_rates_are_degenerate() {
        let lat = Lattice::new(4).unwrap();
        let cls = Classification::scan(&lat);
        let rates = RateTable::new(0.0, 0.0, 0.0);
        match cumulative_probabilities(&cls, &rates) {
            Err(SelectError::DegenerateState) => {}
            other => panic!("expected DegenerateState, got {other:?}"),
        }
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        match select_event(&cls, &rates, &mut rng) {
            Err(SelectError::DegenerateState) => {}
            other => panic!("expected DegenerateState, got {other:?}"),
        }
    }

    #[test]
    fn empty_lattice_with_zero_absorption_is_degenerate() {
        let lat = Lattice::new(4).unwrap();
        let cls = Classification::scan(&lat);
        // Desorption carries rate but there is nothing to desorb.
        let rates = RateTable::new(0.0, 2.0, 1.0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        match select_event(&cls, &rates, &mut rng) {
            Err(SelectError::DegenerateState) => {}
            other => panic!("expected DegenerateState, got {other:?}"),
        }
    }

    #[test]
    fn empty_lattice_always_selects_absorption() {
        let lat = Lattice::new(4).unwrap();
        let cls = Classification::scan(&lat);
        let rates = RateTable::new(4.0, 2.0, 1.0);
        let prob = cumulative_probabilities(&cls, &rates).unwrap();
        assert_eq!(prob[0], 1.0);

        for seed in 0..32 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let event = select_event(&cls, &rates, &mut rng).unwrap();
            assert!(event.class.is_absorption());
        }
    }

    #[test]
    fn full_lattice_always_selects_desorption() {
        let mut lat = Lattice::new(3).unwrap();
        let sites: Vec<_> = lat.interior_sites().collect();
        for s in sites {
            lat.set_occupancy(s, true);
        }
        let cls = Classification::scan(&lat);
        let rates = RateTable::new(4.0, 2.0, 1.0);
        for seed in 0..32 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let event = select_event(&cls, &rates, &mut rng).unwrap();
            assert_eq!(event.class, EventClass::desorption(4));
        }
    }

    #[test]
    fn selected_site_belongs_to_the_selected_class() {
        let lat = lattice_with(6, &[(1, 1), (1, 2), (4, 4), (6, 6)]);
        let cls = Classification::scan(&lat);
        let rates = RateTable::new(4.0, 2.0, 0.5);
        for seed in 0..64 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let event = select_event(&cls, &rates, &mut rng).unwrap();
            assert!(
                cls.class_sites(event.class).contains(&event.site),
                "site {} not in class '{}'",
                event.site,
                event.class
            );
        }
    }

    proptest! {
        /// Cumulative probabilities are monotone and reach 1 within
        /// floating-point tolerance whenever the total rate is nonzero.
        #[test]
        fn cumulative_probabilities_are_monotone_to_one(
            length in 2u32..10,
            fills in prop::collection::vec((any::<u32>(), any::<u32>()), 0..48),
            ra in 0.0f64..10.0,
            rd in 0.0f64..10.0,
            alpha in 0.0f64..3.0,
        ) {
            let mut lat = Lattice::new(length).unwrap();
            for (raw_r, raw_c) in fills {
                lat.set_occupancy(Site::new(1 + raw_r % length, 1 + raw_c % length), true);
            }
            let cls = Classification::scan(&lat);
            let rates = RateTable::new(ra, rd, alpha);

            match cumulative_probabilities(&cls, &rates) {
                Ok(prob) => {
                    for i in 1..EventClass::COUNT {
                        prop_assert!(prob[i] >= prob[i - 1]);
                    }
                    prop_assert!((prob[EventClass::COUNT - 1] - 1.0).abs() < 1e-9);
                }
                Err(SelectError::DegenerateState) => {
                    prop_assert!(total_rate(&cls, &rates) <= 0.0);
                }
                Err(other) => panic!("unexpected {other:?}"),
            }
        }

        /// The clamped site index never escapes the class list.
        #[test]
        fn selection_never_panics_on_valid_snapshots(
            length in 2u32..8,
            fills in prop::collection::vec((any::<u32>(), any::<u32>()), 0..32),
            seed in any::<u64>(),
        ) {
            let mut lat = Lattice::new(length).unwrap();
            for (raw_r, raw_c) in fills {
                lat.set_occupancy(Site::new(1 + raw_r % length, 1 + raw_c % length), true);
            }
            let cls = Classification::scan(&lat);
            let rates = RateTable::new(4.0, 2.0, 0.5);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let event = select_event(&cls, &rates, &mut rng).unwrap();
            prop_assert!(cls.class_sites(event.class).contains(&event.site));
        }
    }
}

//! Placeholder metrics rendered on the dashboard.
//!
//! Values are decorative until a backend supplies real counts.

use rand::Rng;

/// Labels of the dashboard cards, in display order.
pub const METRIC_LABELS: [&str; 3] = ["用户", "设备", "访问量"];

/// Exclusive upper bound of a placeholder value.
pub const METRIC_VALUE_BOUND: u32 = 1000;

/// A single dashboard card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: u32,
}

/// Draw a fresh set of cards, each value uniform in `[0, 1000)`.
pub fn generate_cards<R: Rng>(rng: &mut R) -> [MetricCard; 3] {
    METRIC_LABELS.map(|label| MetricCard {
        label,
        value: rng.random_range(0..METRIC_VALUE_BOUND),
    })
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn should_produce_three_cards_in_label_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let cards = generate_cards(&mut rng);
        let labels: Vec<_> = cards.iter().map(|c| c.label).collect();
        assert_eq!(labels, METRIC_LABELS);
    }

    #[test]
    fn should_keep_values_below_bound() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            for card in generate_cards(&mut rng) {
                assert!(card.value < METRIC_VALUE_BOUND);
            }
        }
    }

    #[test]
    fn should_draw_new_values_on_each_call() {
        let mut rng = StdRng::seed_from_u64(1);
        let draws: Vec<_> = (0..20).map(|_| generate_cards(&mut rng)).collect();
        assert!(draws.windows(2).any(|pair| pair[0] != pair[1]));
    }

    #[test]
    fn should_be_reproducible_with_same_seed() {
        let a = generate_cards(&mut StdRng::seed_from_u64(9));
        let b = generate_cards(&mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }
}

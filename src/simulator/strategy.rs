//! Automated selection strategies.

use rand::distributions::{Distribution, WeightedIndex};
use rand::RngCore;

use crate::error::ConfigError;
use crate::game::{GameConfig, Selection};

/// Produces one selection per simulated trial.
pub trait SelectionStrategy {
    fn next_selection(&mut self, config: &GameConfig, rng: &mut dyn RngCore) -> Selection;
}

/// Always plays the same selection.
#[derive(Debug, Clone)]
pub struct FixedStrategy {
    selection: Selection,
}

impl FixedStrategy {
    pub fn new(selection: Selection) -> Self {
        Self { selection }
    }
}

impl SelectionStrategy for FixedStrategy {
    fn next_selection(&mut self, _config: &GameConfig, _rng: &mut dyn RngCore) -> Selection {
        self.selection.clone()
    }
}

/// Picks each row's column independently, column `i` with probability
/// proportional to `weights[i]`.
#[derive(Debug, Clone)]
pub struct WeightedStrategy {
    columns: WeightedIndex<f64>,
}

impl WeightedStrategy {
    pub fn new(weights: &[f64]) -> Result<Self, ConfigError> {
        let columns = WeightedIndex::new(weights).map_err(|_| ConfigError::InvalidWeights)?;
        Ok(Self { columns })
    }

    pub fn uniform(column_count: usize) -> Result<Self, ConfigError> {
        Self::new(&vec![1.0; column_count])
    }
}

impl SelectionStrategy for WeightedStrategy {
    fn next_selection(&mut self, config: &GameConfig, rng: &mut dyn RngCore) -> Selection {
        let columns = (0..config.rows())
            .map(|_| self.columns.sample(rng) + 1)
            .collect();
        Selection::new(columns)
    }
}

impl<S: SelectionStrategy + ?Sized> SelectionStrategy for Box<S> {
    fn next_selection(&mut self, config: &GameConfig, rng: &mut dyn RngCore) -> Selection {
        (**self).next_selection(config, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_fixed_strategy_repeats() {
        let config = GameConfig::standard(1).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut strategy = FixedStrategy::new(Selection::new(vec![1, 2, 1]));

        for _ in 0..5 {
            assert_eq!(
                strategy.next_selection(&config, &mut rng).columns(),
                &[1, 2, 1]
            );
        }
    }

    #[test]
    fn test_weighted_strategy_shape_and_range() {
        let config = GameConfig::new(1, vec![1, 5, 9]).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut strategy = WeightedStrategy::uniform(3).unwrap();

        for _ in 0..200 {
            let selection = strategy.next_selection(&config, &mut rng);
            assert_eq!(selection.len(), 4);
            assert!(selection.columns().iter().all(|&c| (1..=3).contains(&c)));
        }
    }

    #[test]
    fn test_weighted_strategy_respects_zero_weight() {
        let config = GameConfig::standard(1).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut strategy = WeightedStrategy::new(&[0.0, 1.0]).unwrap();

        for _ in 0..100 {
            let selection = strategy.next_selection(&config, &mut rng);
            assert_eq!(selection.columns(), &[2, 2, 2]);
        }
    }

    #[test]
    fn test_weighted_strategy_rejects_bad_weights() {
        assert!(WeightedStrategy::new(&[]).is_err());
        assert!(WeightedStrategy::new(&[0.0, 0.0]).is_err());
        assert!(WeightedStrategy::new(&[-1.0, 1.0]).is_err());
    }
}

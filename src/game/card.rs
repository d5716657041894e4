//! Card grid, player selections and per-trial outcomes.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use crate::error::GameError;

/// An option value printed on a card cell.
pub type Symbol = u32;

/// One column choice per row, 1-based as a human enters them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection(Vec<usize>);

impl Selection {
    pub fn new(columns: Vec<usize>) -> Self {
        Self(columns)
    }

    pub fn columns(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Zero-based column index picked in `row`.
    fn column_index(&self, row: usize) -> usize {
        self.0[row] - 1
    }
}

impl From<Vec<usize>> for Selection {
    fn from(columns: Vec<usize>) -> Self {
        Self(columns)
    }
}

/// Symbols picked out by a selection, in row order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Combination(Vec<Symbol>);

impl Combination {
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self(symbols)
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The shared symbol if every row picked the same one.
    pub fn uniform_symbol(&self) -> Option<Symbol> {
        let (&first, rest) = self.0.split_first()?;
        rest.iter().all(|&s| s == first).then_some(first)
    }
}

/// Single-digit symbols are concatenated (`151`); if any symbol has more
/// digits every symbol is joined with `-` (`1-11-1`) so labels stay unique.
impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = if self.0.iter().all(|&s| s < 10) { "" } else { "-" };
        for (i, symbol) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(separator)?;
            }
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

/// Result of marking one card with one selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub combination: Combination,
    pub wins: bool,
}

impl Outcome {
    /// The symbol that won, if any.
    pub fn winning_symbol(&self) -> Option<Symbol> {
        if self.wins {
            self.combination.uniform_symbol()
        } else {
            None
        }
    }
}

/// A physical card: `rows` rows of `columns` symbols.
///
/// Cards come from [`possible_cards`]; the only state they carry besides the
/// grid is the last selection applied to them, kept for auditing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    grid: Vec<Vec<Symbol>>,
    last_selection: Option<Selection>,
}

impl Card {
    pub fn from_grid(grid: Vec<Vec<Symbol>>) -> Self {
        Self {
            grid,
            last_selection: None,
        }
    }

    pub fn grid(&self) -> &[Vec<Symbol>] {
        &self.grid
    }

    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    pub fn columns(&self) -> usize {
        self.grid.first().map_or(0, Vec::len)
    }

    pub fn last_selection(&self) -> Option<&Selection> {
        self.last_selection.as_ref()
    }

    /// The combination read down the first column. Each card in the
    /// population realises a distinct one.
    pub fn key_combination(&self) -> Combination {
        Combination::new(self.grid.iter().filter_map(|row| row.first().copied()).collect())
    }

    /// True if the selection has one entry per row, each in `1..=columns`.
    pub fn validate(&self, selection: &Selection) -> bool {
        let columns = self.columns();
        selection.len() == self.rows()
            && selection
                .columns()
                .iter()
                .all(|&column| column >= 1 && column <= columns)
    }

    /// Score a selection against this card without touching any state.
    pub fn score(&self, selection: &Selection) -> Result<Outcome, GameError> {
        if !self.validate(selection) {
            return Err(GameError::InvalidSelection {
                rows: self.rows(),
                columns: self.columns(),
                selections: selection.columns().to_vec(),
            });
        }

        let combination = Combination::new(
            self.grid
                .iter()
                .enumerate()
                .map(|(row, symbols)| symbols[selection.column_index(row)])
                .collect(),
        );
        let wins = combination.uniform_symbol().is_some();

        Ok(Outcome { combination, wins })
    }

    /// Score a selection and record it on the card.
    pub fn mark(&mut self, selection: &Selection) -> Result<Outcome, GameError> {
        let outcome = self.score(selection)?;
        self.last_selection = Some(selection.clone());
        Ok(outcome)
    }
}

/// Build the full card population for a config: one card per combination.
///
/// Row `r` of the card for combination `k` starts with `k[r]` and continues
/// through the remaining options in cyclic order, so every row holds each
/// option exactly once and the first column spells out `k`.
pub fn possible_cards(config: &GameConfig) -> Vec<Card> {
    let options = config.options();
    let columns = config.columns();

    config
        .combinations()
        .into_iter()
        .map(|key| {
            let grid: Vec<Vec<Symbol>> = key
                .symbols()
                .iter()
                .map(|&symbol| {
                    let start = config.option_index(symbol).unwrap_or(0);
                    (0..columns)
                        .map(|offset| options[(start + offset) % columns])
                        .collect()
                })
                .collect();
            Card::from_grid(grid)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn card(grid: &[[Symbol; 2]; 3]) -> Card {
        Card::from_grid(grid.iter().map(|row| row.to_vec()).collect())
    }

    #[test]
    fn test_validate_accepts_in_range_selection() {
        let card = card(&[[1, 5], [5, 1], [1, 5]]);
        assert!(card.validate(&Selection::new(vec![1, 2, 1])));
        assert!(card.validate(&Selection::new(vec![2, 2, 2])));
    }

    #[test]
    fn test_validate_rejects_bad_shape_or_range() {
        let card = card(&[[1, 5], [5, 1], [1, 5]]);
        assert!(!card.validate(&Selection::new(vec![1, 2])));
        assert!(!card.validate(&Selection::new(vec![1, 2, 1, 1])));
        assert!(!card.validate(&Selection::new(vec![0, 1, 1])));
        assert!(!card.validate(&Selection::new(vec![1, 3, 1])));
        assert!(!card.validate(&Selection::new(vec![])));
    }

    #[test]
    fn test_mark_builds_combination_in_row_order() {
        let mut card = card(&[[1, 5], [5, 1], [1, 5]]);
        let outcome = card.mark(&Selection::new(vec![1, 1, 2])).unwrap();
        assert_eq!(outcome.combination.to_string(), "155");
        assert!(!outcome.wins);
        assert_eq!(outcome.winning_symbol(), None);
    }

    #[test]
    fn test_mark_detects_win() {
        let mut card = card(&[[1, 5], [5, 1], [1, 5]]);
        let outcome = card.mark(&Selection::new(vec![2, 1, 2])).unwrap();
        assert_eq!(outcome.combination.to_string(), "555");
        assert!(outcome.wins);
        assert_eq!(outcome.winning_symbol(), Some(5));
    }

    #[test]
    fn test_mark_is_deterministic() {
        let mut card = card(&[[5, 1], [1, 5], [5, 1]]);
        let selection = Selection::new(vec![2, 1, 1]);
        let first = card.mark(&selection).unwrap();
        let second = card.mark(&selection).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_mark_records_selection_only_when_valid() {
        let mut card = card(&[[1, 5], [5, 1], [1, 5]]);
        assert!(card.last_selection().is_none());

        let bad = Selection::new(vec![3, 1, 1]);
        assert!(matches!(
            card.mark(&bad),
            Err(GameError::InvalidSelection { rows: 3, columns: 2, .. })
        ));
        assert!(card.last_selection().is_none());

        let good = Selection::new(vec![1, 2, 1]);
        card.mark(&good).unwrap();
        assert_eq!(card.last_selection(), Some(&good));
    }

    #[test]
    fn test_standard_population_covers_every_combination_once() {
        let config = GameConfig::standard(1).unwrap();
        let cards = possible_cards(&config);
        assert_eq!(cards.len(), 8);

        let keys: Vec<String> = cards.iter().map(|c| c.key_combination().to_string()).collect();
        let unique: HashSet<&String> = keys.iter().collect();
        assert_eq!(unique.len(), 8);

        let expected: HashSet<String> = ["111", "115", "151", "155", "511", "515", "551", "555"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(keys.into_iter().collect::<HashSet<_>>(), expected);
    }

    #[test]
    fn test_multi_digit_labels_are_unique() {
        let config = GameConfig::new(1, vec![1, 11]).unwrap();
        let labels: Vec<String> = config.combinations().iter().map(|c| c.to_string()).collect();

        assert_eq!(
            labels,
            vec!["111", "1-1-11", "1-11-1", "1-11-11", "11-1-1", "11-1-11", "11-11-1", "11-11-11"]
        );
        assert_eq!(labels.iter().collect::<HashSet<_>>().len(), 8);
    }

    #[test]
    fn test_population_rows_are_permutations_of_options() {
        let config = GameConfig::new(1, vec![3, 6, 9]).unwrap();
        let cards = possible_cards(&config);
        assert_eq!(cards.len(), 81);

        for card in &cards {
            assert_eq!(card.rows(), 4);
            assert_eq!(card.columns(), 3);
            for row in card.grid() {
                let mut sorted = row.clone();
                sorted.sort_unstable();
                assert_eq!(sorted, vec![3, 6, 9]);
            }
        }
    }

    #[test]
    fn test_standard_population_grid_shape() {
        let config = GameConfig::standard(1).unwrap();
        let cards = possible_cards(&config);
        // Card for "151": each row keyed by its first symbol
        assert_eq!(cards[2].grid(), &[vec![1, 5], vec![5, 1], vec![1, 5]]);
    }
}

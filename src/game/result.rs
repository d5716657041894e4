//! Running outcome counters for a game.

use std::collections::HashMap;

use serde::Serialize;

use super::card::{Combination, Outcome, Symbol};
use super::config::GameConfig;

/// Occurrence counts per combination, win counts per winning combination and
/// a loss counter.
///
/// Every combination is present from construction with a zero count, so the
/// analysis side never has to check for missing keys.
#[derive(Debug, Clone, Serialize)]
pub struct GameResult {
    combinations: Vec<(Combination, u64)>,
    wins: Vec<(Combination, u64)>,
    losses: u64,
    #[serde(skip)]
    index: HashMap<Combination, usize>,
}

impl GameResult {
    pub fn new(config: &GameConfig) -> Self {
        let combinations: Vec<(Combination, u64)> =
            config.combinations().into_iter().map(|c| (c, 0)).collect();
        let index = combinations
            .iter()
            .enumerate()
            .map(|(i, (c, _))| (c.clone(), i))
            .collect();
        let wins = combinations
            .iter()
            .filter(|(c, _)| c.uniform_symbol().is_some())
            .map(|(c, _)| (c.clone(), 0))
            .collect();

        Self {
            combinations,
            wins,
            losses: 0,
            index,
        }
    }

    /// Fold one outcome into the counters. Returns `false` and leaves every
    /// counter untouched if the combination does not belong to this game.
    pub fn count(&mut self, outcome: &Outcome) -> bool {
        let Some(&i) = self.index.get(&outcome.combination) else {
            return false;
        };
        self.combinations[i].1 += 1;

        match self
            .wins
            .iter_mut()
            .find(|(c, _)| *c == outcome.combination)
        {
            Some(entry) => entry.1 += 1,
            None => self.losses += 1,
        }
        true
    }

    /// Combination counters in enumeration order.
    pub fn combinations(&self) -> &[(Combination, u64)] {
        &self.combinations
    }

    /// Win counters, one per winning combination, in enumeration order.
    pub fn wins(&self) -> &[(Combination, u64)] {
        &self.wins
    }

    pub fn losses(&self) -> u64 {
        self.losses
    }

    pub fn total_wins(&self) -> u64 {
        self.wins.iter().map(|(_, n)| n).sum()
    }

    /// Number of counted outcomes.
    pub fn total(&self) -> u64 {
        self.combinations.iter().map(|(_, n)| n).sum()
    }

    pub fn count_of(&self, combination: &Combination) -> Option<u64> {
        self.index
            .get(combination)
            .map(|&i| self.combinations[i].1)
    }

    /// Count by printed label, e.g. `"151"` or `"1-11-1"`.
    pub fn combination_count(&self, label: &str) -> Option<u64> {
        self.combinations
            .iter()
            .find(|(c, _)| c.to_string() == label)
            .map(|(_, n)| *n)
    }

    /// Wins scored with every row on `symbol`.
    pub fn wins_for(&self, symbol: Symbol) -> u64 {
        self.wins
            .iter()
            .find(|(c, _)| c.uniform_symbol() == Some(symbol))
            .map_or(0, |(_, n)| *n)
    }
}

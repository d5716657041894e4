//! Immutable game parameters.

use serde::Serialize;

use super::card::{Combination, Symbol};
use crate::constants::{DEFAULT_OPTIONS, MAX_COMBINATIONS};
use crate::error::ConfigError;

/// Trial budget and option symbols for one game.
///
/// The card layout follows from the options: one column per option and one
/// more row than there are columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameConfig {
    max_tries: u64,
    options: Vec<Symbol>,
}

impl GameConfig {
    /// Validate and build a config. Options keep the given order, which fixes
    /// the enumeration order of combinations.
    pub fn new(max_tries: u64, options: Vec<Symbol>) -> Result<Self, ConfigError> {
        if max_tries == 0 {
            return Err(ConfigError::ZeroTries);
        }
        if options.is_empty() {
            return Err(ConfigError::NoOptions);
        }
        for (i, option) in options.iter().enumerate() {
            if options[..i].contains(option) {
                return Err(ConfigError::DuplicateOption(*option));
            }
        }

        let columns = options.len();
        match columns.checked_pow(columns as u32 + 1) {
            Some(count) if count <= MAX_COMBINATIONS => {}
            _ => {
                return Err(ConfigError::TooManyOptions {
                    options: columns,
                    limit: MAX_COMBINATIONS,
                })
            }
        }

        Ok(Self { max_tries, options })
    }

    /// The reference two-symbol game (`[1, 5]`, 3 rows by 2 columns).
    pub fn standard(max_tries: u64) -> Result<Self, ConfigError> {
        Self::new(max_tries, DEFAULT_OPTIONS.to_vec())
    }

    pub fn max_tries(&self) -> u64 {
        self.max_tries
    }

    pub fn options(&self) -> &[Symbol] {
        &self.options
    }

    pub fn columns(&self) -> usize {
        self.options.len()
    }

    pub fn rows(&self) -> usize {
        self.columns() + 1
    }

    /// Position of a symbol within the option list.
    pub fn option_index(&self, symbol: Symbol) -> Option<usize> {
        self.options.iter().position(|&o| o == symbol)
    }

    /// Number of distinct combinations (`columns ^ rows`), bounded by
    /// [`MAX_COMBINATIONS`] at construction.
    pub fn combination_count(&self) -> usize {
        self.columns().pow(self.rows() as u32)
    }

    /// Every combination in enumeration order.
    ///
    /// Order is lexicographic over option positions, first row most
    /// significant: for `[1, 5]` that is `111, 115, 151, ..., 555`.
    pub fn combinations(&self) -> Vec<Combination> {
        (0..self.combination_count())
            .map(|ordinal| self.combination_at(ordinal))
            .collect()
    }

    /// Enumeration ordinal of a combination, or `None` if it uses foreign
    /// symbols or has the wrong length.
    pub fn combination_ordinal(&self, combination: &Combination) -> Option<usize> {
        if combination.len() != self.rows() {
            return None;
        }
        combination.symbols().iter().try_fold(0usize, |acc, &symbol| {
            self.option_index(symbol)
                .map(|index| acc * self.columns() + index)
        })
    }

    fn combination_at(&self, ordinal: usize) -> Combination {
        let base = self.columns();
        let mut digits = vec![0usize; self.rows()];
        let mut rest = ordinal;
        for digit in digits.iter_mut().rev() {
            *digit = rest % base;
            rest /= base;
        }
        Combination::new(digits.into_iter().map(|d| self.options[d]).collect())
    }
}

//! One game: a trial budget, a card population and the running tally.

use rand::Rng;
use serde::Serialize;

use super::card::{possible_cards, Card, Outcome, Selection};
use super::config::GameConfig;
use super::result::GameResult;
use crate::error::GameError;

/// A completed trial: which card was drawn, what was selected and what it scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trial {
    pub card_index: usize,
    pub selection: Selection,
    pub outcome: Outcome,
}

/// Orchestrates play against a fixed card population.
///
/// Append-only: every successful `play` adds one trial, and once the budget is
/// spent every further `play` fails with [`GameError::AlreadyFinished`].
#[derive(Debug, Clone)]
pub struct Game {
    name: String,
    config: GameConfig,
    result: GameResult,
    cards: Vec<Card>,
    trials: Vec<Trial>,
}

impl Game {
    pub fn new(name: impl Into<String>, config: GameConfig) -> Self {
        let result = GameResult::new(&config);
        let cards = possible_cards(&config);

        Self {
            name: name.into(),
            config,
            result,
            cards,
            trials: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn result(&self) -> &GameResult {
        &self.result
    }

    /// The card population draws are taken from.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn trials(&self) -> &[Trial] {
        &self.trials
    }

    pub fn tries_played(&self) -> u64 {
        self.trials.len() as u64
    }

    pub fn remaining_tries(&self) -> u64 {
        self.config.max_tries().saturating_sub(self.tries_played())
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_tries() == 0
    }

    /// Draw a card uniformly (with replacement) and mark it with `selection`.
    ///
    /// Errors leave the game untouched: no card recorded, no counter moved.
    pub fn play<R: Rng>(
        &mut self,
        selection: &Selection,
        rng: &mut R,
    ) -> Result<Outcome, GameError> {
        if self.is_finished() {
            return Err(GameError::AlreadyFinished {
                max_tries: self.config.max_tries(),
            });
        }

        let card_index = rng.gen_range(0..self.cards.len());
        let outcome = self.cards[card_index].mark(selection)?;

        self.result.count(&outcome);
        self.trials.push(Trial {
            card_index,
            selection: selection.clone(),
            outcome: outcome.clone(),
        });

        Ok(outcome)
    }
}

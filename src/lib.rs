//! Cardsim - row-matching card game model and Monte Carlo payout validation.
//!
//! A player marks one column per row on a card drawn from a fixed population;
//! the trial wins when every picked symbol matches. Simulations play games to
//! their trial budget and an analysis checks the empirical expected payout
//! against theory.

pub mod analysis;
pub mod build_info;
pub mod constants;
pub mod error;
pub mod game;
pub mod services;
pub mod simulator;

pub use error::{ConfigError, GameError};
pub use game::{Game, GameConfig, Outcome, Selection};

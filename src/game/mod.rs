//! Card game model: configuration, cards, per-game tally and play.

pub mod card;
pub mod config;
pub mod logic;
pub mod result;

pub use card::{possible_cards, Card, Combination, Outcome, Selection, Symbol};
pub use config::GameConfig;
pub use logic::{Game, Trial};
pub use result::GameResult;

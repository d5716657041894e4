//! Error types for game play, configuration and analysis selection.

use thiserror::Error;

use crate::game::card::Symbol;

/// Failures raised while playing or analysing a game.
///
/// All variants are local validation failures. None of them is transient, so
/// callers must fix their input (or stop) rather than retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The trial budget is exhausted; the game is terminal.
    #[error("game already finished (max_tries={max_tries})")]
    AlreadyFinished { max_tries: u64 },

    /// The selection does not fit the card layout.
    #[error("try is invalid (expected {rows} selections in 1..={columns}, got {selections:?})")]
    InvalidSelection {
        rows: usize,
        columns: usize,
        selections: Vec<usize>,
    },

    /// No analysis is registered under this name.
    #[error("analysis {0} not found")]
    UnknownAnalysisKind(String),
}

/// Rejected game or simulation configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("a game needs at least one option")]
    NoOptions,

    #[error("option {0} appears more than once")]
    DuplicateOption(Symbol),

    #[error("max_tries must be positive")]
    ZeroTries,

    #[error("chunk_size must be positive")]
    ZeroChunkSize,

    #[error("expected {expected} weights (one per option), got {got}")]
    WeightCountMismatch { expected: usize, got: usize },

    #[error("weights must be finite, non-negative and not all zero")]
    InvalidWeights,

    #[error("{options} options give more than {limit} combinations")]
    TooManyOptions { options: usize, limit: usize },

    #[error("expected value must be finite and positive, got {0}")]
    InvalidExpectedValue(f64),

    #[error("payout table has {got} entries but the game has {expected} combinations")]
    PayoutTableMismatch { expected: usize, got: usize },
}

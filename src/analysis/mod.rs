//! Statistical checks over a played game.
//!
//! An analysis reads a game's tally and decides whether the experiment is
//! close enough to theory to be trusted.

mod waited_value;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::GameError;
use crate::game::Game;

pub use waited_value::{PayoutTable, WaitedValue, WaitedValueConstraints};

/// Verdict of an analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult<C> {
    pub is_viable: bool,
    pub viability_reason: String,
    pub constraints: C,
}

/// Language of the human-readable viability reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Spanish,
    English,
}

impl Locale {
    /// Whole-percent rendering, e.g. `0.05` -> `5%`.
    pub fn percent(self, fraction: f64) -> String {
        format!("{:.0}%", fraction * 100.0)
    }
}

pub trait Analysis {
    type Constraints;

    fn analyze(&self) -> AnalysisResult<Self::Constraints>;

    fn is_viable(&self) -> bool;

    fn viability_reason(&self) -> String;
}

/// Registered analyses, addressed by kebab-case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisKind {
    WaitedValue,
}

impl AnalysisKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AnalysisKind::WaitedValue => "waited-value",
        }
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "waited-value" => Ok(AnalysisKind::WaitedValue),
            other => Err(GameError::UnknownAnalysisKind(other.to_string())),
        }
    }
}

/// Constraints of any registered analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Constraints {
    WaitedValue(WaitedValueConstraints),
}

/// An analysis picked by [`AnalysisKind`].
#[derive(Debug, Clone)]
pub enum SelectedAnalysis<'a> {
    WaitedValue(WaitedValue<'a>),
}

impl SelectedAnalysis<'_> {
    pub fn kind(&self) -> AnalysisKind {
        match self {
            SelectedAnalysis::WaitedValue(_) => AnalysisKind::WaitedValue,
        }
    }
}

impl Analysis for SelectedAnalysis<'_> {
    type Constraints = Constraints;

    fn analyze(&self) -> AnalysisResult<Constraints> {
        match self {
            SelectedAnalysis::WaitedValue(analysis) => {
                let result = analysis.analyze();
                AnalysisResult {
                    is_viable: result.is_viable,
                    viability_reason: result.viability_reason,
                    constraints: Constraints::WaitedValue(result.constraints),
                }
            }
        }
    }

    fn is_viable(&self) -> bool {
        match self {
            SelectedAnalysis::WaitedValue(analysis) => analysis.is_viable(),
        }
    }

    fn viability_reason(&self) -> String {
        match self {
            SelectedAnalysis::WaitedValue(analysis) => analysis.viability_reason(),
        }
    }
}

pub fn analysis_for(game: &Game, kind: AnalysisKind) -> SelectedAnalysis<'_> {
    match kind {
        AnalysisKind::WaitedValue => SelectedAnalysis::WaitedValue(WaitedValue::new(game)),
    }
}

/// Build an analysis by name; unknown names fail with
/// [`GameError::UnknownAnalysisKind`].
pub fn create_analysis<'a>(game: &'a Game, name: &str) -> Result<SelectedAnalysis<'a>, GameError> {
    Ok(analysis_for(game, name.parse()?))
}

//! Monte Carlo simulation of the card game.
//!
//! A [`Simulation`] plays a game to its trial budget with an automated
//! [`SelectionStrategy`], in chunks driven by a [`SimulationRunner`], and
//! reports per-trial, progress and completion events through
//! [`SimulationHooks`]. A [`SimReport`] summarises the outcome.

mod config;
mod hooks;
mod report;
mod runner;
mod simulation;
mod strategy;

pub use config::SimConfig;
pub use hooks::{NoHooks, SimulationHooks, SimulationProgress};
pub use report::{CombinationRow, SimReport};
pub use runner::{CancellationToken, RunnerStep, SimulationRunner};
pub use simulation::Simulation;
pub use strategy::{FixedStrategy, SelectionStrategy, WeightedStrategy};

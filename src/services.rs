//! Entry points for the presentation layer.

use crate::error::ConfigError;
use crate::game::{Game, GameConfig};
use crate::simulator::{SimConfig, Simulation, SimulationHooks, WeightedStrategy};

/// A reference two-symbol game with the given budget.
pub fn create_game(name: impl Into<String>, max_tries: u64) -> Result<Game, ConfigError> {
    Ok(Game::new(name, GameConfig::standard(max_tries)?))
}

/// A simulation of `tries` trials with uniform column weights and default
/// chunking.
pub fn create_simulation<H: SimulationHooks>(
    tries: u64,
    hooks: H,
) -> Result<Simulation<WeightedStrategy, H>, ConfigError> {
    let game = create_game(format!("game-simulation-with-{}", tries), tries)?;
    let config = SimConfig::uniform(game.config().columns());
    create_simulation_with(game, hooks, &config)
}

/// A simulation of an existing game using `config`'s weights, chunk size and seed.
pub fn create_simulation_with<H: SimulationHooks>(
    game: Game,
    hooks: H,
    config: &SimConfig,
) -> Result<Simulation<WeightedStrategy, H>, ConfigError> {
    let weights = config.resolved_weights(game.config().columns())?;
    let strategy = WeightedStrategy::new(&weights)?;
    Simulation::new(game, strategy, hooks, config)
}

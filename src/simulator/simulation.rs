//! A game played to its budget by an automated strategy.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::config::SimConfig;
use super::hooks::{NoHooks, SimulationHooks};
use super::runner::{CancellationToken, RunnerStep, SimulationRunner};
use super::strategy::SelectionStrategy;
use crate::error::{ConfigError, GameError};
use crate::game::Game;

/// Binds a [`Game`], a [`SelectionStrategy`] and an observer.
///
/// The runner is sized by the game's remaining budget (the full `max_tries`
/// for a fresh game), so a completed simulation always leaves the game
/// finished.
pub struct Simulation<S, H = NoHooks> {
    game: Game,
    strategy: S,
    hooks: H,
    runner: SimulationRunner,
    rng: ChaCha8Rng,
}

impl<S: SelectionStrategy> Simulation<S, NoHooks> {
    pub fn without_hooks(game: Game, strategy: S, config: &SimConfig) -> Result<Self, ConfigError> {
        Self::new(game, strategy, NoHooks, config)
    }
}

impl<S: SelectionStrategy, H: SimulationHooks> Simulation<S, H> {
    pub fn new(game: Game, strategy: S, hooks: H, config: &SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let runner = SimulationRunner::new(game.remaining_tries(), config.chunk_size)?;
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        Ok(Self {
            game,
            strategy,
            hooks,
            runner,
            rng,
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn into_game(self) -> Game {
        self.game
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Handle that stops the run before its next chunk.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.runner.cancellation_token()
    }

    /// Use a token the caller created, e.g. one the hooks also hold.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.runner = self.runner.with_cancellation(token);
        self
    }

    /// Play every remaining trial without yielding.
    pub fn start(&mut self) -> Result<RunnerStep, GameError> {
        tracing::info!(
            game = self.game.name(),
            tries = self.game.remaining_tries(),
            "simulation started"
        );

        let Self {
            game,
            strategy,
            hooks,
            runner,
            rng,
        } = &mut *self;
        let step = runner.run_blocking(
            |observer: &mut H| -> Result<(), GameError> {
                let selection = strategy.next_selection(game.config(), &mut *rng);
                let outcome = game.play(&selection, &mut *rng)?;
                observer.on_try(&outcome);
                Ok(())
            },
            hooks,
        )?;

        self.log_end(&step);
        Ok(step)
    }

    /// Play every remaining trial, yielding to the tokio scheduler between
    /// chunks.
    #[cfg(feature = "async")]
    pub async fn start_async(&mut self) -> Result<RunnerStep, GameError> {
        tracing::info!(
            game = self.game.name(),
            tries = self.game.remaining_tries(),
            "simulation started"
        );

        let Self {
            game,
            strategy,
            hooks,
            runner,
            rng,
        } = &mut *self;
        let step = runner
            .run(
                |observer: &mut H| -> Result<(), GameError> {
                    let selection = strategy.next_selection(game.config(), &mut *rng);
                    let outcome = game.play(&selection, &mut *rng)?;
                    observer.on_try(&outcome);
                    Ok(())
                },
                hooks,
            )
            .await?;

        self.log_end(&step);
        Ok(step)
    }

    fn log_end(&self, step: &RunnerStep) {
        let result = self.game.result();
        tracing::info!(
            game = self.game.name(),
            tries = step.progress().current_tries,
            finished = step.is_finished(),
            wins = result.total_wins(),
            losses = result.losses(),
            "simulation stopped"
        );
    }
}

//! Chunked trial runner.
//!
//! Executes a trial action a fixed number of times in bounded chunks. Each
//! call to [`SimulationRunner::step`] runs one chunk and hands control back to
//! the caller; [`SimulationRunner::run`] drives the steps on a tokio runtime,
//! yielding to the scheduler between chunks so a single-threaded host stays
//! responsive.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::hooks::{SimulationHooks, SimulationProgress};
use crate::error::ConfigError;

/// Shared cancel flag, checked at the top of every chunk.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// What a single scheduling turn ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerStep {
    /// A chunk ran and more trials remain.
    Progress(SimulationProgress),
    /// All trials have run.
    Finished(SimulationProgress),
    /// The token was cancelled before the chunk started.
    Cancelled(SimulationProgress),
}

impl RunnerStep {
    pub fn progress(&self) -> SimulationProgress {
        match *self {
            RunnerStep::Progress(p) | RunnerStep::Finished(p) | RunnerStep::Cancelled(p) => p,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, RunnerStep::Finished(_))
    }
}

/// Runs `tries` trials, `chunk_size` per turn, strictly in order.
#[derive(Debug)]
pub struct SimulationRunner {
    tries: u64,
    current_tries: u64,
    chunk_size: u64,
    finished: bool,
    cancel: CancellationToken,
}

impl SimulationRunner {
    pub fn new(tries: u64, chunk_size: u64) -> Result<Self, ConfigError> {
        if chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }

        Ok(Self {
            tries,
            current_tries: 0,
            chunk_size,
            finished: false,
            cancel: CancellationToken::new(),
        })
    }

    /// Replace the runner's token with one the caller keeps a handle to.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn progress(&self) -> SimulationProgress {
        SimulationProgress {
            current_tries: self.current_tries,
            max_tries: self.tries,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Run one chunk of trials.
    ///
    /// The trial action gets the hooks so it can report per-trial events. A
    /// failing trial stops the chunk and its error is returned as is; the
    /// trials before it stay counted. Stepping a finished runner is a no-op
    /// that reports `Finished` again without re-firing `on_finish`.
    pub fn step<E, F, H>(&mut self, task: &mut F, hooks: &mut H) -> Result<RunnerStep, E>
    where
        F: FnMut(&mut H) -> Result<(), E>,
        H: SimulationHooks,
    {
        if self.finished {
            return Ok(RunnerStep::Finished(self.progress()));
        }
        if self.cancel.is_cancelled() {
            tracing::warn!(
                current_tries = self.current_tries,
                max_tries = self.tries,
                "simulation cancelled"
            );
            return Ok(RunnerStep::Cancelled(self.progress()));
        }

        let end = (self.current_tries + self.chunk_size).min(self.tries);
        while self.current_tries < end {
            task(&mut *hooks)?;
            self.current_tries += 1;
        }

        let progress = self.progress();
        tracing::debug!(
            current_tries = progress.current_tries,
            max_tries = progress.max_tries,
            "chunk complete"
        );
        hooks.on_progress(progress);

        if self.current_tries < self.tries {
            Ok(RunnerStep::Progress(progress))
        } else {
            self.finished = true;
            hooks.on_finish();
            Ok(RunnerStep::Finished(progress))
        }
    }

    /// Step until finished or cancelled, without yielding.
    pub fn run_blocking<E, F, H>(&mut self, mut task: F, hooks: &mut H) -> Result<RunnerStep, E>
    where
        F: FnMut(&mut H) -> Result<(), E>,
        H: SimulationHooks,
    {
        loop {
            match self.step(&mut task, hooks)? {
                RunnerStep::Progress(_) => continue,
                done => return Ok(done),
            }
        }
    }

    /// Step until finished or cancelled, yielding to the tokio scheduler
    /// between chunks.
    #[cfg(feature = "async")]
    pub async fn run<E, F, H>(&mut self, mut task: F, hooks: &mut H) -> Result<RunnerStep, E>
    where
        F: FnMut(&mut H) -> Result<(), E>,
        H: SimulationHooks,
    {
        loop {
            match self.step(&mut task, hooks)? {
                RunnerStep::Progress(_) => tokio::task::yield_now().await,
                done => return Ok(done),
            }
        }
    }
}

//! Observer interface for simulation events.

use serde::Serialize;

use crate::game::Outcome;

/// Progress after a chunk of trials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimulationProgress {
    pub current_tries: u64,
    pub max_tries: u64,
}

impl SimulationProgress {
    pub fn fraction(&self) -> f64 {
        if self.max_tries == 0 {
            1.0
        } else {
            self.current_tries as f64 / self.max_tries as f64
        }
    }
}

/// Callbacks fired while a simulation runs. Every method defaults to a no-op,
/// so implementors only override what they observe.
pub trait SimulationHooks {
    /// After each successful trial.
    fn on_try(&mut self, _outcome: &Outcome) {}

    /// After each chunk.
    fn on_progress(&mut self, _progress: SimulationProgress) {}

    /// Once, after the last progress event of a run that reached its end.
    fn on_finish(&mut self) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHooks;

impl SimulationHooks for NoHooks {}

impl<H: SimulationHooks + ?Sized> SimulationHooks for &mut H {
    fn on_try(&mut self, outcome: &Outcome) {
        (**self).on_try(outcome);
    }

    fn on_progress(&mut self, progress: SimulationProgress) {
        (**self).on_progress(progress);
    }

    fn on_finish(&mut self) {
        (**self).on_finish();
    }
}

impl<H: SimulationHooks + ?Sized> SimulationHooks for Box<H> {
    fn on_try(&mut self, outcome: &Outcome) {
        (**self).on_try(outcome);
    }

    fn on_progress(&mut self, progress: SimulationProgress) {
        (**self).on_progress(progress);
    }

    fn on_finish(&mut self) {
        (**self).on_finish();
    }
}

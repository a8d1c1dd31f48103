//! `OutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use chase_sim::{RoundOutcome, SimObserver, SimulationResult};
use tracing::error;

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that persists every round through any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct OutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> OutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            error!(error = %e, "failed to persist round outcome");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for OutputObserver<W> {
    fn on_round_end(&mut self, outcome: &RoundOutcome) {
        let result = self.writer.write_round(outcome);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _result: &SimulationResult) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}

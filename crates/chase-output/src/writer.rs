//! The `OutputWriter` trait implemented by all backend writers.

use chase_sim::RoundOutcome;

use crate::OutputResult;

/// Trait implemented by the JSON and CSV writers.
///
/// Errors are stored by [`OutputObserver`][crate::OutputObserver] and
/// retrieved with `take_error`, so the simulation never sees them.
pub trait OutputWriter {
    /// Persist one round.
    fn write_round(&mut self, outcome: &RoundOutcome) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Drive two writers in lockstep.  Both are always attempted; the first
/// error is returned.
impl<A: OutputWriter, B: OutputWriter> OutputWriter for (A, B) {
    fn write_round(&mut self, outcome: &RoundOutcome) -> OutputResult<()> {
        let a = self.0.write_round(outcome);
        let b = self.1.write_round(outcome);
        a.and(b)
    }

    fn finish(&mut self) -> OutputResult<()> {
        let a = self.0.finish();
        let b = self.1.finish();
        a.and(b)
    }
}

//! Operator-facing round reporting.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use chase_sim::{RoundOutcome, SimObserver, SimulationResult};

const PROMPT: &str = "Press Enter to continue to the next round...";

/// Logs each round, prints the alive count, forwards to `inner`, and
/// optionally waits for the operator between rounds.
///
/// The pause runs after the round is complete and never touches
/// simulation state.  It is skipped after the terminal round and after the
/// round that reaches `round_limit`.  End of input or a read error turns
/// waiting off for the rest of the run.
pub struct ConsoleObserver<S, R, O> {
    pub inner:   S,
    input:       R,
    out:         O,
    round_limit: u32,
    wait:        bool,
}

impl<S: SimObserver, R: BufRead, O: Write> ConsoleObserver<S, R, O> {
    pub fn new(inner: S, input: R, out: O, round_limit: u32, wait: bool) -> Self {
        Self { inner, input, out, round_limit, wait }
    }

    fn pause(&mut self) {
        let _ = write!(self.out, "{PROMPT}");
        let _ = self.out.flush();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => {
                debug!("no operator input, running remaining rounds unattended");
                self.wait = false;
            }
            Ok(_) => {}
        }
    }
}

impl<S: SimObserver, R: BufRead, O: Write> SimObserver for ConsoleObserver<S, R, O> {
    fn on_round_start(&mut self, round: u32) {
        info!("Round {round}");
        self.inner.on_round_start(round);
    }

    fn on_round_end(&mut self, outcome: &RoundOutcome) {
        debug!("Wolf position is {}", outcome.predator);
        let action = if outcome.captured { "has eaten" } else { "is chasing" };
        debug!("Wolf {action} sheep with index {}", outcome.target);

        self.inner.on_round_end(outcome);

        if outcome.terminal {
            info!("All sheep have been eaten");
            let _ = writeln!(self.out, "All sheep have been eaten");
            return;
        }

        info!("Number of sheep alive: {}", outcome.live_count);
        let _ = writeln!(self.out, "Number of sheep alive: {}", outcome.live_count);

        if self.wait && outcome.round < self.round_limit {
            self.pause();
        }
    }

    fn on_sim_end(&mut self, result: &SimulationResult) {
        self.inner.on_sim_end(result);
    }
}

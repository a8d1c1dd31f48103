//! CSV output backend.
//!
//! Appends one `round_number,sheep_alive_count` row per round to
//! `alive.csv`, counting rounds from 0.  The header is written only when
//! the file is new or empty.

use std::fs::{File, OpenOptions};
use std::path::Path;

use chase_sim::RoundOutcome;
use csv::{Writer, WriterBuilder};

use crate::row::AliveCountRow;
use crate::writer::OutputWriter;
use crate::OutputResult;

/// Writes the alive-count table.
pub struct CsvWriter {
    rows:     Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) `path` for appending.
    pub fn open(path: impl AsRef<Path>) -> OutputResult<Self> {
        let path = path.as_ref();
        let fresh = std::fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true);

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut rows = WriterBuilder::new().has_headers(false).from_writer(file);
        if fresh {
            rows.write_record(AliveCountRow::HEADER)?;
            rows.flush()?;
        }

        Ok(Self { rows, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_round(&mut self, outcome: &RoundOutcome) -> OutputResult<()> {
        self.rows.serialize(AliveCountRow::from(outcome))?;
        // Keep the file consistent if the run is interrupted.
        self.rows.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        Ok(())
    }
}

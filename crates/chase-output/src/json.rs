//! JSON output backend.
//!
//! Keeps the whole `pos.json` array in memory and rewrites the file after
//! every round, so the file on disk is always a complete document.  An
//! existing file is extended; a missing or unparseable one starts a fresh
//! record.

use std::fs::File;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use chase_sim::RoundOutcome;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, warn};

use crate::row::RoundRecord;
use crate::writer::OutputWriter;
use crate::OutputResult;

/// Appends [`RoundRecord`]s to a JSON array file.
pub struct JsonWriter {
    path:    PathBuf,
    records: Vec<Value>,
}

impl JsonWriter {
    /// Load whatever array already lives at `path`.
    ///
    /// Only genuine I/O failures (other than "not found") are errors.
    pub fn open(path: impl AsRef<Path>) -> OutputResult<Self> {
        let path = path.as_ref().to_path_buf();
        let records = match std::fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str::<Vec<Value>>(&text) {
                Ok(records) => {
                    debug!(path = %path.display(), rounds = records.len(), "extending existing round record");
                    records
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "existing round record is malformed, starting fresh");
                    Vec::new()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, records })
    }

    fn rewrite(&self) -> OutputResult<()> {
        let mut out = BufWriter::new(File::create(&self.path)?);
        let mut ser = serde_json::Serializer::with_formatter(
            &mut out,
            PrettyFormatter::with_indent(b"    "),
        );
        self.records.serialize(&mut ser)?;
        out.flush()?;
        Ok(())
    }
}

impl OutputWriter for JsonWriter {
    fn write_round(&mut self, outcome: &RoundOutcome) -> OutputResult<()> {
        self.records.push(serde_json::to_value(RoundRecord::from(outcome))?);
        self.rewrite()
    }

    fn finish(&mut self) -> OutputResult<()> {
        // Every round is already on disk.
        Ok(())
    }
}

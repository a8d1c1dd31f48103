//! `chase-output`: round recorders for the chase simulation.
//!
//! | Backend        | File        | Contents                                        |
//! |----------------|-------------|-------------------------------------------------|
//! | [`JsonWriter`] | `pos.json`  | array of `{round_no, wolf_pos, sheep_pos}`      |
//! | [`CsvWriter`]  | `alive.csv` | `round_number,sheep_alive_count` per round      |
//!
//! Both implement [`OutputWriter`] and are driven by [`OutputObserver`],
//! which implements `chase_sim::SimObserver`.  A write failure is stored,
//! never propagated into the simulation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use chase_output::{CsvWriter, JsonWriter, OutputObserver};
//!
//! let writers = (JsonWriter::open(dir.join("pos.json"))?, CsvWriter::open(dir.join("alive.csv"))?);
//! let mut obs = OutputObserver::new(writers);
//! sim.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod json;
pub mod observer;
pub mod row;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use json::JsonWriter;
pub use observer::OutputObserver;
pub use row::{AliveCountRow, PosRecord, RoundRecord};
pub use writer::OutputWriter;

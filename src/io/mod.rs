//! Batch input and report output.
//!
//! Thin wrappers around the core: the loader turns a text stream into
//! process records, the report module turns scheduled batches back into
//! text. Neither knows which algorithm ran.

mod loader;
mod report;

pub use loader::{load_input, load_processes, parse_processes, read_processes};
pub use report::{render_json, render_report, render_summary, render_table, render_timeline};

//! Aggregated output
//!
//! - `block` - block header styles and the writer that owns the output file
//! - `summary` - per-run counters and their text/JSON rendering

mod block;
mod summary;

pub use block::{BlockStyle, BlockWriter, OutputFile};
pub use summary::{RunSummary, print_summary, print_summary_json};

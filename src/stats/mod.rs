//! Statistics boundary: the per-generation record file and its reader.

mod reader;
mod writer;

pub use reader::{StatsSeries, StatsSummary};
pub use writer::StatsWriter;

/// Statistics file errors.
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("statistics file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: unparsable value for field '{field}'")]
    MalformedRecord { line: usize, field: String },
}

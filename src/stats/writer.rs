//! Statistics file writer.
//!
//! Appends one textual record per generation, preceded by a blank line and a
//! 50-character rule, under a timestamped header. The file is truncated once
//! at creation and only appended afterwards.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::schema::GenerationRecord;
use crate::sim::RecordSink;

use super::StatsError;

/// Record sink backed by a statistics text file.
pub struct StatsWriter {
    file: File,
    path: PathBuf,
}

impl StatsWriter {
    /// Create (truncating) the statistics file and write the header.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, StatsError> {
        let path = path.as_ref().to_path_buf();
        let mut file = File::create(&path)?;
        writeln!(
            file,
            "=== Estadísticas de Simulación - {} ===\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        )?;
        Ok(Self { file, path })
    }

    /// Path of the underlying file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSink for StatsWriter {
    fn emit(&mut self, record: &GenerationRecord) -> std::io::Result<()> {
        write!(self.file, "\n{}\n\n{}", "=".repeat(50), record)?;
        self.file.flush()
    }
}

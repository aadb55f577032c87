//! Per-generation outcome records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable snapshot of one generation's outcome.
///
/// Built once per generation by the evolution engine and appended to an
/// ordered, append-only history. The `Display` form is the textual record
/// format shared with the statistics file (labels kept verbatim from the
/// original simulator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    /// Generation index, starting at 0.
    pub generation: usize,
    /// Steps consumed before the generation ended.
    pub steps: usize,
    /// Points collected (resources plus the goal bonus).
    pub score: i64,
    /// Accumulated depressant penalty.
    pub penalty: i64,
    /// Whether the walker reached the goal.
    pub arrived: bool,
    /// Wall-clock seconds since the simulation started.
    pub elapsed_seconds: f64,
}

impl fmt::Display for GenerationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generación: {}", self.generation)?;
        writeln!(f, "Pasos: {}", self.steps)?;
        writeln!(f, "Puntos: {}", self.score)?;
        writeln!(f, "Alcohol: {}", self.penalty)?;
        writeln!(
            f,
            "Llegó a la meta: {}",
            if self.arrived { "Sí" } else { "No" }
        )?;
        writeln!(f, "Tiempo total: {:.2} segundos", self.elapsed_seconds)
    }
}

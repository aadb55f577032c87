//! Simulation module - walker state machine and evolutionary loop.

mod evolution;
mod genes;
mod runner;
mod walker;

pub use evolution::{EvolutionEngine, NullSink, RecordSink};
pub use genes::{Action, GeneRng};
pub use runner::{RunError, SimulationReport, SimulationRunner, StopReason};
pub use walker::{DEPRESSANT_PENALTY, GOAL_POINTS, RESOURCE_POINTS, StepOutcome, Walker};

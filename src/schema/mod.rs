//! Configuration and data types for the simulation.

mod config;
mod maze;
mod record;

pub use config::{ConfigError, SimulationConfig};
pub use maze::{Cell, Maze, MazeError};
pub use record::GenerationRecord;

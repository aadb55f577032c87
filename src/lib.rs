//! Gridwalker - (1+1) evolutionary maze navigation.
//!
//! A single mutating agent (the walker) navigates a grid maze from a start
//! cell to a goal cell, collecting resources, avoiding a penalizing resource,
//! and avoiding lethal cells. Each generation runs the walker for a bounded
//! number of steps from a fixed-length gene sequence; the best-performing
//! sequence seen so far seeds the next generation via per-gene mutation.
//!
//! # Architecture
//!
//! The crate is split into three modules:
//!
//! - `schema`: configuration, maze, and record types
//! - `sim`: the walker state machine and the evolutionary loop
//! - `stats`: the statistics file writer and reader
//!
//! # Example
//!
//! ```rust,no_run
//! use gridwalker::{
//!     schema::{Maze, SimulationConfig},
//!     sim::{NullSink, SimulationRunner},
//! };
//!
//! let maze = Maze::parse("..A\n.RV\nX.M\n").unwrap();
//! let config = SimulationConfig {
//!     random_seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let mut runner = SimulationRunner::new(config, maze).unwrap();
//! let report = runner.run(&mut NullSink);
//!
//! println!(
//!     "{} generations, best fitness {:.2}",
//!     report.generations, report.best_fitness
//! );
//! ```

pub mod schema;
pub mod sim;
pub mod stats;

// Re-export commonly used types
pub use schema::{Cell, GenerationRecord, Maze, SimulationConfig};
pub use sim::{EvolutionEngine, SimulationRunner, StepOutcome, Walker};
pub use stats::{StatsSeries, StatsWriter};

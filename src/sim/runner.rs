//! Synchronous driver loop around the evolution engine.
//!
//! Replaces the original interactive timer tick with an explicit loop: step
//! the current walker to a terminal state, advance one generation, repeat
//! until the wall-clock budget runs out or the goal is reached.

use log::info;

use crate::schema::{ConfigError, GenerationRecord, Maze, MazeError, SimulationConfig};

use super::evolution::{EvolutionEngine, RecordSink};

/// Why a simulation run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The wall-clock budget was exhausted.
    TimeLimit,
    /// A walker reached the goal.
    GoalReached,
    /// The configured generation cap was hit.
    MaxGenerations,
}

/// Final report for a completed run.
#[derive(Debug, Clone)]
pub struct SimulationReport {
    /// Generations completed.
    pub generations: usize,
    /// Best fitness observed across the run.
    pub best_fitness: f32,
    /// Total wall-clock seconds.
    pub elapsed_seconds: f64,
    /// Whether any generation reached the goal.
    pub goal_reached: bool,
    /// What ended the run.
    pub stop_reason: StopReason,
}

/// Errors surfaced before a run starts.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Maze(#[from] MazeError),
    #[error("origin ({0}, {1}) lies outside the {2}x{3} maze")]
    OriginOutsideMaze(usize, usize, usize, usize),
}

/// Drives the evolution engine against a maze.
///
/// Each generation replays on a fresh copy of the pristine maze so consumed
/// resources reappear and runs are reproducible from the seed alone.
#[derive(Debug)]
pub struct SimulationRunner {
    config: SimulationConfig,
    maze: Maze,
    goal: (usize, usize),
    engine: EvolutionEngine,
}

impl SimulationRunner {
    /// Validate the configuration and maze, and prepare a run.
    ///
    /// Refuses to start without a goal cell, and with an origin outside the
    /// grid.
    pub fn new(config: SimulationConfig, maze: Maze) -> Result<Self, RunError> {
        config.validate()?;
        let goal = maze.find_goal().ok_or(MazeError::MissingGoal)?;
        let (row, col) = config.origin;
        if !maze.in_bounds(row as isize, col as isize) {
            return Err(RunError::OriginOutsideMaze(
                row,
                col,
                maze.height(),
                maze.width(),
            ));
        }

        let engine = EvolutionEngine::new(config.clone());
        Ok(Self {
            config,
            maze,
            goal,
            engine,
        })
    }

    /// Goal coordinates discovered in the maze.
    pub fn goal(&self) -> (usize, usize) {
        self.goal
    }

    /// The underlying engine, for inspection.
    pub fn engine(&self) -> &EvolutionEngine {
        &self.engine
    }

    /// Run to completion, emitting records to `sink`.
    pub fn run(&mut self, sink: &mut dyn RecordSink) -> SimulationReport {
        self.run_with_callback(sink, |_| {})
    }

    /// Run to completion, invoking `callback` after every generation.
    pub fn run_with_callback<F>(
        &mut self,
        sink: &mut dyn RecordSink,
        mut callback: F,
    ) -> SimulationReport
    where
        F: FnMut(&GenerationRecord),
    {
        self.engine.initialize();

        let stop_reason = 'run: loop {
            if let Some(cap) = self.config.max_generations
                && self.engine.generation() >= cap
            {
                break StopReason::MaxGenerations;
            }

            // One generation on a fresh maze.
            let mut maze = self.maze.clone();
            loop {
                // The time budget is checked every tick, like the original
                // 50ms timer loop.
                if self.engine.elapsed_seconds() > self.config.time_limit_secs {
                    break 'run StopReason::TimeLimit;
                }
                if self.engine.current_mut().step(&mut maze).is_terminal() {
                    break;
                }
            }

            let record = self.engine.advance_generation(self.goal, sink);
            callback(&record);
            if record.arrived {
                info!(
                    "goal reached in generation {} after {} steps",
                    record.generation, record.steps
                );
                break StopReason::GoalReached;
            }
        };

        SimulationReport {
            generations: self.engine.generation(),
            best_fitness: self.engine.best_fitness(),
            elapsed_seconds: self.engine.elapsed_seconds(),
            goal_reached: self.engine.history().iter().any(|record| record.arrived),
            stop_reason,
        }
    }
}

//! Configuration types for the simulation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_origin() -> (usize, usize) {
    (0, 0)
}
fn default_step_limit() -> usize {
    200
}
fn default_gene_length() -> usize {
    200
}
fn default_mutation_rate() -> f32 {
    0.1
}
fn default_time_limit_secs() -> f64 {
    300.0
}
fn default_stats_path() -> PathBuf {
    PathBuf::from("walker_stats.txt")
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Walker start cell (row, col).
    #[serde(default = "default_origin")]
    pub origin: (usize, usize),
    /// Maximum steps per generation.
    #[serde(default = "default_step_limit")]
    pub step_limit: usize,
    /// Length of the gene sequence.
    #[serde(default = "default_gene_length")]
    pub gene_length: usize,
    /// Per-gene mutation probability (0.0-1.0).
    #[serde(default = "default_mutation_rate")]
    pub mutation_rate: f32,
    /// Total wall-clock budget for the whole simulation, in seconds.
    #[serde(default = "default_time_limit_secs")]
    pub time_limit_secs: f64,
    /// Optional hard cap on generation count.
    #[serde(default)]
    pub max_generations: Option<usize>,
    /// Random seed for reproducibility.
    #[serde(default)]
    pub random_seed: Option<u64>,
    /// Path of the statistics file.
    #[serde(default = "default_stats_path")]
    pub stats_path: PathBuf,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            step_limit: default_step_limit(),
            gene_length: default_gene_length(),
            mutation_rate: default_mutation_rate(),
            time_limit_secs: default_time_limit_secs(),
            max_generations: None,
            random_seed: None,
            stats_path: default_stats_path(),
        }
    }
}

impl SimulationConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step_limit == 0 {
            return Err(ConfigError::InvalidStepLimit);
        }
        if self.gene_length == 0 {
            return Err(ConfigError::InvalidGeneLength);
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::InvalidMutationRate(self.mutation_rate));
        }
        if self.time_limit_secs < 0.0 {
            return Err(ConfigError::InvalidTimeLimit(self.time_limit_secs));
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Step limit must be non-zero")]
    InvalidStepLimit,
    #[error("Gene length must be non-zero")]
    InvalidGeneLength,
    #[error("Mutation rate {0} is outside [0, 1]")]
    InvalidMutationRate(f32),
    #[error("Time limit {0} must be non-negative")]
    InvalidTimeLimit(f64),
}

//! The (1+1) evolutionary engine.
//!
//! One walker per generation; the all-time best gene sequence is the sole
//! mutation parent for the next generation (elitism). Fitness ties keep the
//! incumbent.

use std::time::Instant;

use log::{debug, warn};

use crate::schema::{GenerationRecord, SimulationConfig};

use super::genes::{Action, GeneRng};
use super::walker::Walker;

/// Destination for emitted generation records.
///
/// The engine reports sink failures and keeps evolving; a broken statistics
/// file never stops a run.
pub trait RecordSink {
    fn emit(&mut self, record: &GenerationRecord) -> std::io::Result<()>;
}

/// Sink that drops every record. Useful for tests and dry runs.
#[derive(Debug, Default)]
pub struct NullSink;

impl RecordSink for NullSink {
    fn emit(&mut self, _record: &GenerationRecord) -> std::io::Result<()> {
        Ok(())
    }
}

/// Owns the current walker, the best-known gene sequence, and the
/// generation bookkeeping.
#[derive(Debug)]
pub struct EvolutionEngine {
    config: SimulationConfig,
    rng: GeneRng,
    current: Walker,
    best_genes: Vec<Action>,
    best_fitness: f32,
    generation: usize,
    history: Vec<GenerationRecord>,
    started_at: Instant,
}

impl EvolutionEngine {
    /// Create an engine with a freshly randomized walker.
    pub fn new(config: SimulationConfig) -> Self {
        let mut rng = match config.random_seed {
            Some(seed) => GeneRng::new(seed),
            None => GeneRng::random(),
        };
        let genes = rng.random_genes(config.gene_length);
        let current = Walker::new(config.origin, genes, config.step_limit);

        Self {
            config,
            rng,
            current,
            best_genes: Vec::new(),
            best_fitness: f32::NEG_INFINITY,
            generation: 0,
            history: Vec::new(),
            started_at: Instant::now(),
        }
    }

    /// Restart from generation 0: fresh random walker, cleared history,
    /// new start timestamp. The RNG stream is kept.
    pub fn initialize(&mut self) {
        let genes = self.rng.random_genes(self.config.gene_length);
        self.current = Walker::new(self.config.origin, genes, self.config.step_limit);
        self.best_genes = Vec::new();
        self.best_fitness = f32::NEG_INFINITY;
        self.generation = 0;
        self.history.clear();
        self.started_at = Instant::now();
    }

    /// The walker being evaluated this generation.
    pub fn current(&self) -> &Walker {
        &self.current
    }

    /// Mutable access for the driver's stepping loop.
    pub fn current_mut(&mut self) -> &mut Walker {
        &mut self.current
    }

    /// Index of the generation currently being evaluated.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Best fitness seen so far, `NEG_INFINITY` before the first generation.
    pub fn best_fitness(&self) -> f32 {
        self.best_fitness
    }

    /// Ordered, append-only record history.
    pub fn history(&self) -> &[GenerationRecord] {
        &self.history
    }

    /// Wall-clock seconds since the engine (re)started.
    pub fn elapsed_seconds(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }

    /// Close out the current generation and derive the next walker.
    ///
    /// Records the outcome, updates the all-time best on strict fitness
    /// improvement, replaces the current walker with a mutated child of the
    /// best genes, and emits the record to `sink`.
    pub fn advance_generation(
        &mut self,
        goal: (usize, usize),
        sink: &mut dyn RecordSink,
    ) -> GenerationRecord {
        let fitness = self.current.evaluate(goal);

        let record = GenerationRecord {
            generation: self.generation,
            steps: self.current.steps_taken,
            score: self.current.score,
            penalty: self.current.penalty,
            arrived: self.current.arrived,
            elapsed_seconds: self.elapsed_seconds(),
        };
        self.history.push(record.clone());

        // Strict greater-than: ties keep the incumbent best.
        if fitness > self.best_fitness {
            debug!(
                "generation {}: new best fitness {:.2} (was {:.2})",
                self.generation, fitness, self.best_fitness
            );
            self.best_genes = self.current.genes.clone();
            self.best_fitness = fitness;
        }

        let parent = self.best_genes.clone();
        let child_genes = self.rng.mutate(&parent, self.config.mutation_rate);
        self.current = Walker::new(self.config.origin, child_genes, self.config.step_limit);
        self.generation += 1;

        if let Err(err) = sink.emit(&record) {
            warn!(
                "failed to emit record for generation {}: {err}",
                record.generation
            );
        }
        record
    }
}

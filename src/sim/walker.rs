//! The walker: maze traversal state machine and fitness evaluation.

use crate::schema::{Cell, Maze};

use super::genes::Action;

/// Points granted per consumed resource.
pub const RESOURCE_POINTS: i64 = 10;
/// Points granted on reaching the goal.
pub const GOAL_POINTS: i64 = 100;
/// Penalty accrued per consumed depressant.
pub const DEPRESSANT_PENALTY: i64 = 5;

/// Result of a single walker step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The turn was consumed (moved, collected, or blocked in place).
    Active,
    /// The walker entered the goal cell. Terminal for this generation.
    Arrived,
    /// The walker entered a lethal cell. Terminal for this generation.
    Dead,
    /// The walker is dead or out of steps; nothing changed.
    Halted,
}

impl StepOutcome {
    /// Whether the driver should stop stepping this generation.
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, StepOutcome::Active)
    }
}

/// The single evolving agent traversing the maze.
#[derive(Debug, Clone)]
pub struct Walker {
    /// Current cell (row, col).
    pub position: (usize, usize),
    /// Start cell, used by [`Walker::reset`].
    pub origin: (usize, usize),
    /// Points collected this generation.
    pub score: i64,
    /// Depressant penalty accrued this generation.
    pub penalty: i64,
    /// False once a lethal cell has been entered.
    pub alive: bool,
    /// True once the goal cell has been entered.
    pub arrived: bool,
    /// Turns consumed, bounded by `step_limit`.
    pub steps_taken: usize,
    /// Maximum turns per generation.
    pub step_limit: usize,
    /// Movement gene sequence; never resized.
    pub genes: Vec<Action>,
    /// Index of the next gene to execute, wraps modulo the gene length.
    pub cursor: usize,
    /// Last computed fitness. Refreshed by [`Walker::evaluate`].
    pub fitness: f32,
}

impl Walker {
    /// Create a walker at `origin` with the given gene sequence.
    pub fn new(origin: (usize, usize), genes: Vec<Action>, step_limit: usize) -> Self {
        Self {
            position: origin,
            origin,
            score: 0,
            penalty: 0,
            alive: true,
            arrived: false,
            steps_taken: 0,
            step_limit,
            genes,
            cursor: 0,
            fitness: 0.0,
        }
    }

    /// Restore the walker to its origin with all counters cleared. The gene
    /// sequence is kept.
    pub fn reset(&mut self) {
        self.position = self.origin;
        self.score = 0;
        self.penalty = 0;
        self.alive = true;
        self.arrived = false;
        self.steps_taken = 0;
        self.cursor = 0;
        self.fitness = 0.0;
    }

    /// Execute one gene against the maze.
    ///
    /// A move into a wall or outside the grid is rejected but still consumes
    /// the turn and the gene. Entering a lethal or goal cell returns
    /// immediately without incrementing the step counter; this asymmetry is
    /// load-bearing for the recorded step counts and is covered by tests.
    ///
    /// A walker with no genes has nothing to execute and halts immediately.
    pub fn step(&mut self, maze: &mut Maze) -> StepOutcome {
        if !self.alive || self.steps_taken >= self.step_limit || self.genes.is_empty() {
            return StepOutcome::Halted;
        }

        let (dr, dc) = self.genes[self.cursor].delta();
        let row = self.position.0 as isize + dr;
        let col = self.position.1 as isize + dc;

        if maze.in_bounds(row, col) {
            let (row, col) = (row as usize, col as usize);
            if maze.cell(row, col) != Cell::Wall {
                self.position = (row, col);
                match maze.cell(row, col) {
                    Cell::Resource => {
                        self.score += RESOURCE_POINTS;
                        maze.set(row, col, Cell::Empty);
                    }
                    Cell::Depressant => {
                        self.penalty += DEPRESSANT_PENALTY;
                        maze.set(row, col, Cell::Empty);
                    }
                    Cell::Lethal => {
                        self.alive = false;
                        return StepOutcome::Dead;
                    }
                    Cell::Goal => {
                        self.arrived = true;
                        self.score += GOAL_POINTS;
                        return StepOutcome::Arrived;
                    }
                    Cell::Empty | Cell::Wall => {}
                }
            }
        }

        self.steps_taken += 1;
        self.cursor = (self.cursor + 1) % self.genes.len();
        StepOutcome::Active
    }

    /// Compute the walker's fitness against the goal position and cache it.
    ///
    /// Idempotent given unchanged walker state.
    pub fn evaluate(&mut self, goal: (usize, usize)) -> f32 {
        let distance = self.position.0.abs_diff(goal.0) + self.position.1.abs_diff(goal.1);

        let mut fitness = 1000.0 - 10.0 * distance as f32 + 2.0 * self.score as f32
            - 5.0 * self.penalty as f32;

        if self.arrived {
            fitness += 2000.0;
            // Extra bonus only for a sober arrival.
            if self.penalty == 0 {
                fitness += 1000.0;
            }
        } else if !self.alive {
            fitness -= 500.0;
        }

        self.fitness = fitness;
        fitness
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Maze;
    use proptest::prelude::*;

    fn walker_with(genes: Vec<Action>) -> Walker {
        Walker::new((0, 0), genes, 200)
    }

    #[test]
    fn test_move_east_into_empty() {
        let mut maze = Maze::parse("..\n..\n").unwrap();
        let mut walker = walker_with(vec![Action::East]);
        assert_eq!(walker.step(&mut maze), StepOutcome::Active);
        assert_eq!(walker.position, (0, 1));
        assert_eq!(walker.steps_taken, 1);
        assert_eq!(walker.cursor, 0); // wrapped: single-gene sequence
    }

    #[test]
    fn test_blocked_by_wall_still_consumes_turn() {
        let mut maze = Maze::parse(".R\n..\n").unwrap();
        let mut walker = walker_with(vec![Action::East, Action::South]);
        assert_eq!(walker.step(&mut maze), StepOutcome::Active);
        assert_eq!(walker.position, (0, 0));
        assert_eq!(walker.steps_taken, 1);
        assert_eq!(walker.cursor, 1);
    }

    #[test]
    fn test_blocked_by_edge_still_consumes_turn() {
        let mut maze = Maze::parse("..\n..\n").unwrap();
        let mut walker = walker_with(vec![Action::North]);
        assert_eq!(walker.step(&mut maze), StepOutcome::Active);
        assert_eq!(walker.position, (0, 0));
        assert_eq!(walker.steps_taken, 1);
    }

    #[test]
    fn test_resource_collected_and_consumed() {
        let mut maze = Maze::parse(".A\n..\n").unwrap();
        let mut walker = walker_with(vec![Action::East]);
        assert_eq!(walker.step(&mut maze), StepOutcome::Active);
        assert_eq!(walker.score, 10);
        assert_eq!(maze.cell(0, 1), Cell::Empty);
        assert_eq!(walker.steps_taken, 1);
    }

    #[test]
    fn test_depressant_collected_and_consumed() {
        let mut maze = Maze::parse(".V\n..\n").unwrap();
        let mut walker = walker_with(vec![Action::East]);
        assert_eq!(walker.step(&mut maze), StepOutcome::Active);
        assert_eq!(walker.penalty, 5);
        assert_eq!(walker.score, 0);
        assert_eq!(maze.cell(0, 1), Cell::Empty);
    }

    #[test]
    fn test_lethal_kills_without_counting_the_step() {
        let mut maze = Maze::parse(".X\n..\n").unwrap();
        let mut walker = walker_with(vec![Action::East]);
        assert_eq!(walker.step(&mut maze), StepOutcome::Dead);
        assert!(!walker.alive);
        assert_eq!(walker.steps_taken, 0);
        assert_eq!(walker.cursor, 0);
        // Dead walkers halt without state changes.
        assert_eq!(walker.step(&mut maze), StepOutcome::Halted);
        assert_eq!(walker.steps_taken, 0);
    }

    #[test]
    fn test_goal_arrival_without_counting_the_step() {
        let mut maze = Maze::parse(".M\n..\n").unwrap();
        let mut walker = walker_with(vec![Action::East]);
        assert_eq!(walker.step(&mut maze), StepOutcome::Arrived);
        assert!(walker.arrived);
        assert_eq!(walker.score, 100);
        assert_eq!(walker.steps_taken, 0);
    }

    #[test]
    fn test_step_limit_halts() {
        let mut maze = Maze::parse("..\n..\n").unwrap();
        let mut walker = Walker::new((0, 0), vec![Action::East, Action::West], 3);
        for _ in 0..3 {
            assert_eq!(walker.step(&mut maze), StepOutcome::Active);
        }
        assert_eq!(walker.steps_taken, 3);
        let before = walker.clone();
        assert_eq!(walker.step(&mut maze), StepOutcome::Halted);
        assert_eq!(walker.position, before.position);
        assert_eq!(walker.steps_taken, before.steps_taken);
        assert_eq!(walker.cursor, before.cursor);
    }

    #[test]
    fn test_empty_genes_halt_without_panicking() {
        let mut maze = Maze::parse("..\n..\n").unwrap();
        let mut walker = walker_with(Vec::new());
        assert_eq!(walker.step(&mut maze), StepOutcome::Halted);
        assert_eq!(walker.position, (0, 0));
        assert_eq!(walker.steps_taken, 0);
        assert_eq!(walker.cursor, 0);
    }

    #[test]
    fn test_cursor_wraps() {
        let mut maze = Maze::parse("...\n...\n").unwrap();
        let mut walker = Walker::new((0, 0), vec![Action::East, Action::West], 200);
        for _ in 0..5 {
            walker.step(&mut maze);
        }
        assert_eq!(walker.cursor, 1);
    }

    #[test]
    fn test_reset() {
        let mut maze = Maze::parse(".A\n.X\n").unwrap();
        let mut walker = walker_with(vec![Action::East, Action::South]);
        walker.step(&mut maze);
        walker.step(&mut maze);
        assert!(!walker.alive);
        let genes = walker.genes.clone();
        walker.reset();
        assert_eq!(walker.position, walker.origin);
        assert!(walker.alive);
        assert_eq!(walker.score, 0);
        assert_eq!(walker.penalty, 0);
        assert_eq!(walker.steps_taken, 0);
        assert_eq!(walker.cursor, 0);
        assert_eq!(walker.genes, genes);
    }

    #[test]
    fn test_fitness_sober_arrival() {
        // arrived, penalty 0, score 50, distance 0 => 1000 + 100 + 2000 + 1000
        let mut walker = walker_with(vec![Action::East]);
        walker.position = (2, 2);
        walker.arrived = true;
        walker.score = 50;
        assert_eq!(walker.evaluate((2, 2)), 4100.0);
        assert_eq!(walker.fitness, 4100.0);
    }

    #[test]
    fn test_fitness_death() {
        // not arrived, dead, score 0, penalty 10, distance 5
        // => 1000 - 50 + 0 - 50 - 500
        let mut walker = walker_with(vec![Action::East]);
        walker.position = (0, 0);
        walker.alive = false;
        walker.penalty = 10;
        assert_eq!(walker.evaluate((2, 3)), 400.0);
    }

    #[test]
    fn test_fitness_is_idempotent() {
        let mut walker = walker_with(vec![Action::East]);
        walker.score = 30;
        let first = walker.evaluate((4, 4));
        assert_eq!(walker.evaluate((4, 4)), first);
    }

    proptest! {
        #[test]
        fn prop_never_leaves_grid_or_enters_wall(
            gene_codes in proptest::collection::vec(0u8..4, 1..64),
            cell_codes in proptest::collection::vec(0u8..6, 25),
            steps in 0usize..400,
        ) {
            let genes: Vec<Action> =
                gene_codes.iter().map(|&g| Action::ALL[g as usize]).collect();
            let mut maze = Maze::filled(5, 5);
            for (i, &code) in cell_codes.iter().enumerate() {
                let cell = match code {
                    0 => Cell::Empty,
                    1 => Cell::Resource,
                    2 => Cell::Depressant,
                    3 => Cell::Lethal,
                    4 => Cell::Goal,
                    _ => Cell::Wall,
                };
                maze.set(i / 5, i % 5, cell);
            }
            // Keep the origin survivable so stepping can begin.
            maze.set(2, 2, Cell::Empty);

            let mut walker = Walker::new((2, 2), genes.clone(), 200);
            for _ in 0..steps {
                walker.step(&mut maze);
                let (row, col) = walker.position;
                prop_assert!(row < 5 && col < 5);
                prop_assert!(maze.cell(row, col) != Cell::Wall);
                prop_assert!(walker.steps_taken <= 200);
                prop_assert!(walker.cursor < genes.len());
            }
        }
    }
}

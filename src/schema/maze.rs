//! Maze grid and cell kinds.
//!
//! The maze is a rectangular, mutable grid of [`Cell`] values. Consumable
//! cells (resources and depressants) are rewritten to [`Cell::Empty`] in
//! place as the walker collects them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a single maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// Traversable, no effect.
    Empty,
    /// Reward pickup (+10 points), consumed on entry.
    Resource,
    /// Penalty pickup (+5 penalty), consumed on entry.
    Depressant,
    /// Kills the walker on entry.
    Lethal,
    /// Target cell (+100 points), ends the generation.
    Goal,
    /// Impassable; moves into a wall are rejected.
    Wall,
}

impl Cell {
    /// Parse the single-character editor symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Cell::Empty),
            'A' => Some(Cell::Resource),
            'V' => Some(Cell::Depressant),
            'X' => Some(Cell::Lethal),
            'M' => Some(Cell::Goal),
            'R' => Some(Cell::Wall),
            _ => None,
        }
    }

    /// Single-character editor symbol for this cell.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Resource => 'A',
            Cell::Depressant => 'V',
            Cell::Lethal => 'X',
            Cell::Goal => 'M',
            Cell::Wall => 'R',
        }
    }
}

/// Rectangular grid of cells, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maze {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Maze {
    /// Create a maze filled with empty cells.
    pub fn filled(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    /// Parse a maze from its textual form: one line per row, one symbol
    /// per cell. Blank lines are ignored.
    pub fn parse(text: &str) -> Result<Self, MazeError> {
        let mut width = 0;
        let mut cells = Vec::new();
        let mut height = 0;

        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let row: Vec<Cell> = line
                .chars()
                .map(|c| {
                    Cell::from_symbol(c).ok_or(MazeError::UnknownSymbol {
                        symbol: c,
                        line: line_no + 1,
                    })
                })
                .collect::<Result<_, _>>()?;

            if height == 0 {
                width = row.len();
            } else if row.len() != width {
                return Err(MazeError::RaggedRow { line: line_no + 1 });
            }
            cells.extend(row);
            height += 1;
        }

        if height == 0 {
            return Err(MazeError::Empty);
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether a signed coordinate pair lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    /// Cell at (row, col). Callers must stay in bounds.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.width + col]
    }

    /// Overwrite the cell at (row, col).
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.width + col] = cell;
    }

    /// Coordinates of the first goal cell in row-major order, if any.
    pub fn find_goal(&self) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(|&c| c == Cell::Goal)
            .map(|i| (i / self.width, i % self.width))
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                write!(f, "{}", self.cell(row, col).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Maze construction and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum MazeError {
    #[error("maze text contains no rows")]
    Empty,
    #[error("row at line {line} has a different width than the first row")]
    RaggedRow { line: usize },
    #[error("unknown cell symbol '{symbol}' at line {line}")]
    UnknownSymbol { symbol: char, line: usize },
    #[error("maze has no goal cell")]
    MissingGoal,
}

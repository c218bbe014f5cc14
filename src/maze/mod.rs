pub mod cell;
mod error;
mod grid;

use std::str::FromStr;

pub use cell::Cell;
pub use error::{MazeError, Result};
pub use grid::Grid;

/// A `(row, col)` position in the maze.
pub type Coord = (usize, usize);

/// An immutable rectangular maze of walls and free cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Maze {
    grid: Grid<Cell>,
}

impl Maze {
    /// Creates a maze with every cell set to `cell`.
    pub fn filled(rows: usize, cols: usize, cell: Cell) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::Empty);
        }
        Ok(Maze {
            grid: Grid::new(rows, cols, cell),
        })
    }

    /// Builds a maze from a list of rows.
    ///
    /// # Errors
    /// * [`MazeError::Empty`] if there are no rows or the first row is empty
    /// * [`MazeError::Ragged`] if any row differs in length from the first one
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Self> {
        let cols = match rows.first() {
            Some(first) if !first.as_ref().is_empty() => first.as_ref().len(),
            _ => return Err(MazeError::Empty),
        };
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (row, cells) in rows.iter().enumerate() {
            let cells = cells.as_ref();
            if cells.len() != cols {
                return Err(MazeError::Ragged {
                    row,
                    expected: cols,
                    found: cells.len(),
                });
            }
            data.extend_from_slice(cells);
        }
        Ok(Maze {
            grid: Grid::from_raw(data, rows.len(), cols),
        })
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Number of free cells in the maze.
    pub fn free_count(&self) -> usize {
        self.grid.data().iter().filter(|cell| cell.is_free()).count()
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.rows() && coord.1 < self.cols()
    }

    /// True iff the coordinate is in bounds and not a wall.
    pub fn is_free(&self, coord: Coord) -> bool {
        self.grid.get(coord).is_some_and(|cell| cell.is_free())
    }

    /// Get the free neighbors of a cell, in the order up, down, left, right.
    ///
    /// Every search engine relies on this order for tie-breaking, so it must not change.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        let (row, col) = coord;
        // NOTE: row - 1 and col - 1 wrap to usize::MAX at the top and left edges, and
        // row + 1 and col + 1 saturate at usize::MAX. Both land out of bounds and are
        // filtered by `is_free`.
        let candidates = if self.is_in_bounds(coord) {
            [
                Some((row.wrapping_sub(1), col)),   // Up
                Some((row.saturating_add(1), col)), // Down
                Some((row, col.wrapping_sub(1))),   // Left
                Some((row, col.saturating_add(1))), // Right
            ]
        } else {
            // No neighbors if the coordinate is out of bounds
            [None; 4]
        };
        candidates
            .into_iter()
            .flatten()
            .filter(move |&c| self.is_free(c))
    }

    /// Iterate over every row as a slice of cells.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.grid.data().chunks(self.cols())
    }
}

impl std::ops::Index<Coord> for Maze {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.grid[index]
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    /// Parses a layout where each non-blank line is one row, `#` is a wall and `.` is free.
    /// Leading and trailing whitespace on each line is ignored.
    fn from_str(s: &str) -> Result<Self> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(col, ch)| {
                        Cell::from_char(ch).ok_or(MazeError::UnknownCell { row, col, ch })
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Maze::from_rows(&rows)
    }
}

impl std::fmt::Display for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.iter_rows() {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

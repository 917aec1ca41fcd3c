use std::fmt;

use rand::Rng;

use super::{Cell, GridError};

/// Relative (row, col) offsets of the eight neighbours.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Grid is one generation of the board: a fixed rows x columns block of cells.
/// Every mutation returns a new grid, so a generation handed to the renderer
/// never changes underneath it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells dead
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![Cell::Dead; rows * columns],
        }
    }

    /// Create a grid where exactly the listed (row, col) cells are alive
    pub fn with_alive(rows: usize, columns: usize, alive: &[(usize, usize)]) -> Result<Self, GridError> {
        let mut grid = Self::new(rows, columns);
        for &(row, col) in alive {
            let idx = grid.checked_index(row, col)?;
            grid.cells[idx] = Cell::Alive;
        }
        Ok(grid)
    }

    /// Fill a grid where each cell is independently alive with `alive_probability`
    pub fn random<R: Rng + ?Sized>(rows: usize, columns: usize, alive_probability: f64, rng: &mut R) -> Self {
        let cells = (0..rows * columns)
            .map(|_| {
                if rng.random::<f64>() < alive_probability {
                    Cell::Alive
                } else {
                    Cell::Dead
                }
            })
            .collect();

        Self { rows, columns, cells }
    }

    /// Get grid dimensions as (rows, columns)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.columns + col
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row < self.rows && col < self.columns {
            Ok(self.index(row, col))
        } else {
            Err(GridError::OutOfBounds(row, col, self.rows, self.columns))
        }
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.columns).then(|| self.cells[self.index(row, col)])
    }

    /// Count live neighbours. The board does not wrap: anything past an
    /// edge counts as dead, so corners see at most 3 neighbours.
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                self.get(r, c)
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Compute the next generation. Reads only `self`, never the cells
    /// already written for the new grid.
    pub fn step(&self) -> Self {
        let cells = (0..self.rows)
            .flat_map(|row| (0..self.columns).map(move |col| (row, col)))
            .map(|(row, col)| {
                let current = self.cells[self.index(row, col)];
                current.evolve(self.live_neighbors(row, col))
            })
            .collect();

        Self {
            rows: self.rows,
            columns: self.columns,
            cells,
        }
    }

    /// Copy of this grid with one cell flipped
    pub fn toggled(&self, row: usize, col: usize) -> Result<Self, GridError> {
        let idx = self.checked_index(row, col)?;
        let mut next = self.clone();
        next.cells[idx] = next.cells[idx].toggle();
        Ok(next)
    }

    /// All-dead grid with the same dimensions
    pub fn cleared(&self) -> Self {
        Self::new(self.rows, self.columns)
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their (row, col) positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.columns, idx % self.columns, cell))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.columns.max(1)) {
            for cell in row {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

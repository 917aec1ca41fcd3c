/// Cell is a single square of the board, either Dead (0) or Alive (1).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Flip between dead and alive
    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// Next state under B3/S23 given the live neighbour count.
    /// Fewer than 2 or more than 3 neighbours always yields a dead cell,
    /// a dead cell with exactly 3 is born, anything else keeps its state.
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (_, n) if n < 2 || n > 3 => Cell::Dead,
            (Cell::Dead, 3) => Cell::Alive,
            (current, _) => current,
        }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Dead => 0,
            Cell::Alive => 1,
        }
    }
}

mod cell;
mod errors;
mod grid;

pub use cell::Cell;
pub use errors::GridError;
pub use grid::Grid;

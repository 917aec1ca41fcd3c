// Domain layer - the automaton itself
pub mod domain;

// Application layer - clock, config and session state
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, GridError};
pub use application::{Clock, ConfigError, GameState, RunState, SimulationConfig};
pub use ui::Button;

mod clock;
mod config;
mod errors;
mod game_state;

pub use clock::{Clock, RunState};
pub use config::SimulationConfig;
pub use errors::ConfigError;
pub use game_state::GameState;

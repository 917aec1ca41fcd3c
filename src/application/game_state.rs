use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use super::{Clock, ConfigError, RunState, SimulationConfig};
use crate::domain::{Grid, GridError};

/// GameState orchestrates the simulation.
/// Clicks, buttons and the clock all update the board through it.
pub struct GameState {
    pub grid: Grid,
    pub clock: Clock,
    pub generation: u64,
    alive_probability: f64,
    speed_step_ms: i64,
    rng: ChaCha8Rng,
}

impl GameState {
    /// Create a stopped simulation with an empty board
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let (min_interval, max_interval) = config.interval_bounds();
        let seed = config.seed.unwrap_or_else(rand::random);
        info!(rows = config.rows, columns = config.columns, seed, "creating simulation");

        Ok(Self {
            grid: Grid::new(config.rows, config.columns),
            clock: Clock::new(config.interval(), min_interval, max_interval),
            generation: 0,
            alive_probability: config.alive_probability,
            speed_step_ms: config.speed_step().as_millis() as i64,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    pub const fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        let state = self.clock.toggle();
        info!(?state, generation = self.generation, "play/pause");
        self
    }

    /// Clear grid and reset generation counter
    pub fn clear(mut self) -> Self {
        self.grid = self.grid.cleared();
        self.generation = 0;
        info!("board cleared");
        self
    }

    /// Randomize grid and reset generation counter
    pub fn randomize(mut self) -> Self {
        let (rows, columns) = self.grid.dimensions();
        self.grid = Grid::random(rows, columns, self.alive_probability, &mut self.rng);
        self.generation = 0;
        info!(population = self.grid.population(), "board randomized");
        self
    }

    /// Make generations come slower (`steps > 0`) or faster (`steps < 0`)
    pub fn adjust_speed(mut self, steps: i64) -> Self {
        let interval = self.clock.adjust_interval(steps * self.speed_step_ms);
        info!(interval_ms = interval.as_millis() as u64, "speed changed");
        self
    }

    /// Flip a single cell. Works whether or not the simulation is running.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        self.grid = self.grid.toggled(row, col)?;
        debug!(row, col, "cell toggled");
        Ok(())
    }

    /// Produce the next generation right away
    pub fn step(mut self) -> Self {
        self.grid = self.grid.step();
        self.generation += 1;
        debug!(generation = self.generation, population = self.grid.population(), "generation");
        self
    }

    /// Let one frame's worth of time pass, stepping if a tick is due
    pub fn tick(mut self, elapsed: Duration) -> Self {
        if self.clock.advance(elapsed) {
            self = self.step();
        }
        self
    }

    pub fn run_state(&self) -> RunState {
        self.clock.state()
    }
}

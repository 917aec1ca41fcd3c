use std::time::Duration;

use super::ConfigError;

/// Tunable parameters of a simulation session.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub rows: usize,
    pub columns: usize,

    // Delay between generations
    pub interval_ms: u64,
    pub min_interval_ms: u64,
    pub max_interval_ms: u64,
    pub speed_step_ms: u64,

    /// Chance of a cell starting alive when the board is randomized
    pub alive_probability: f64,
    /// Fixed RNG seed; `None` draws one at startup
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rows: 28,
            columns: 50,
            interval_ms: 1000,
            min_interval_ms: 100,
            max_interval_ms: 5000,
            speed_step_ms: 100,
            alive_probability: 0.2,
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn with_dimensions(mut self, rows: usize, columns: usize) -> Self {
        self.rows = rows;
        self.columns = columns;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn interval_bounds(&self) -> (Duration, Duration) {
        (
            Duration::from_millis(self.min_interval_ms),
            Duration::from_millis(self.max_interval_ms),
        )
    }

    pub fn speed_step(&self) -> Duration {
        Duration::from_millis(self.speed_step_ms)
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(ConfigError::EmptyGrid(self.rows, self.columns));
        }
        if !(0.0..=1.0).contains(&self.alive_probability) {
            return Err(ConfigError::Probability(self.alive_probability));
        }
        if self.min_interval_ms == 0 || self.min_interval_ms > self.max_interval_ms {
            return Err(ConfigError::SpeedRange(self.min_interval_ms, self.max_interval_ms));
        }
        if !(self.min_interval_ms..=self.max_interval_ms).contains(&self.interval_ms) {
            return Err(ConfigError::Interval(
                self.interval_ms,
                self.min_interval_ms,
                self.max_interval_ms,
            ));
        }
        if self.speed_step_ms == 0 {
            return Err(ConfigError::SpeedStep);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SimulationConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!((config.rows, config.columns), (28, 50));
        assert_eq!(config.interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_rejects_empty_grid() {
        let config = SimulationConfig::default().with_dimensions(0, 50);
        assert_eq!(config.validate(), Err(ConfigError::EmptyGrid(0, 50)));
    }

    #[test]
    fn test_rejects_bad_probability() {
        let config = SimulationConfig { alive_probability: 1.5, ..Default::default() };
        assert_eq!(config.validate(), Err(ConfigError::Probability(1.5)));

        let config = SimulationConfig { alive_probability: f64::NAN, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_speed_settings() {
        let inverted = SimulationConfig { min_interval_ms: 6000, ..Default::default() };
        assert_eq!(inverted.validate(), Err(ConfigError::SpeedRange(6000, 5000)));

        let zero_min = SimulationConfig { min_interval_ms: 0, ..Default::default() };
        assert!(zero_min.validate().is_err());

        let outside = SimulationConfig { interval_ms: 50, ..Default::default() };
        assert_eq!(outside.validate(), Err(ConfigError::Interval(50, 100, 5000)));

        let no_step = SimulationConfig { speed_step_ms: 0, ..Default::default() };
        assert_eq!(no_step.validate(), Err(ConfigError::SpeedStep));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::Interval(50, 100, 5000).to_string(),
            "interval 50ms is outside 100..=5000ms"
        );
    }
}

use quick_error::quick_error;

quick_error! {
    #[derive(Debug, Clone, PartialEq)]
    pub enum ConfigError {
        EmptyGrid(rows: usize, columns: usize) {
            display("grid must have at least one cell, got {rows}x{columns}")
        }
        Probability(p: f64) {
            display("alive probability {p} is outside [0, 1]")
        }
        SpeedRange(min_ms: u64, max_ms: u64) {
            display("speed range {min_ms}..={max_ms}ms is empty or starts at zero")
        }
        Interval(interval_ms: u64, min_ms: u64, max_ms: u64) {
            display("interval {interval_ms}ms is outside {min_ms}..={max_ms}ms")
        }
        SpeedStep {
            display("speed step must be greater than zero")
        }
    }
}

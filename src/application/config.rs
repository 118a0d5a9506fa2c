use std::time::Duration;
use thiserror::Error;

/// Errors raised when validating a [`SimulationConfig`]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("grid dimensions {rows}x{cols} are not allocatable")]
    ZeroDimension { rows: usize, cols: usize },
    #[error("delay bounds {min}..={max} ms are invalid")]
    InvalidDelayBounds { min: u64, max: u64 },
    #[error("initial delay {delay} ms is outside {min}..={max} ms")]
    InitialDelayOutOfRange { delay: u64, min: u64, max: u64 },
    #[error("cell size must be a positive number of pixels, got {0}")]
    InvalidCellSize(f32),
}

/// Startup configuration for the simulation and its window.
/// Defaults reproduce the classic 40x40 board with a 500 ms generation delay.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub rows: usize,
    pub cols: usize,
    /// Side length of one cell on screen, in pixels
    pub cell_size: f32,
    pub initial_delay_ms: u64,
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
    /// Slider snapping granularity
    pub delay_step_ms: u64,
    /// Seed for the randomize command; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rows: 40,
            cols: 40,
            cell_size: 15.0,
            initial_delay_ms: 500,
            min_delay_ms: 100,
            max_delay_ms: 1000,
            delay_step_ms: 50,
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn with_dimensions(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_initial_delay(mut self, delay_ms: u64) -> Self {
        self.initial_delay_ms = delay_ms;
        self
    }

    pub fn with_delay_bounds(mut self, min_ms: u64, max_ms: u64) -> Self {
        self.min_delay_ms = min_ms;
        self.max_delay_ms = max_ms;
        self
    }

    pub fn with_cell_size(mut self, cell_size: f32) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Initial delay as a `Duration`
    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    /// Check that the configuration describes a usable simulation
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::ZeroDimension {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.min_delay_ms == 0 || self.min_delay_ms > self.max_delay_ms {
            return Err(ConfigError::InvalidDelayBounds {
                min: self.min_delay_ms,
                max: self.max_delay_ms,
            });
        }
        if !(self.min_delay_ms..=self.max_delay_ms).contains(&self.initial_delay_ms) {
            return Err(ConfigError::InitialDelayOutOfRange {
                delay: self.initial_delay_ms,
                min: self.min_delay_ms,
                max: self.max_delay_ms,
            });
        }
        if !(self.cell_size > 0.0) {
            return Err(ConfigError::InvalidCellSize(self.cell_size));
        }
        Ok(())
    }
}

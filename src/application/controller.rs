use std::time::Duration;

use macroquad::logging::{debug, info, warn};
use rand::{SeedableRng, rngs::StdRng};

use super::{ConfigError, SimulationConfig, StepTimer};
use crate::domain::{EngineError, LifeEngine, Pattern};

/// SimulationController drives a [`LifeEngine`] through the Stopped/Running
/// state machine. It owns run state and delay; the engine owns only the grid.
pub struct SimulationController {
    engine: LifeEngine,
    timer: StepTimer,
    rng: StdRng,
    delay_ms: u64,
    min_delay_ms: u64,
    max_delay_ms: u64,
    generation: u64,
}

impl SimulationController {
    /// Build a stopped controller with an empty grid
    pub fn new(config: &SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let engine = LifeEngine::new(config.rows, config.cols).map_err(|_| {
            ConfigError::ZeroDimension {
                rows: config.rows,
                cols: config.cols,
            }
        })?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            engine,
            timer: StepTimer::new(config.initial_delay()),
            rng,
            delay_ms: config.initial_delay_ms,
            min_delay_ms: config.min_delay_ms,
            max_delay_ms: config.max_delay_ms,
            generation: 0,
        })
    }

    pub fn engine(&self) -> &LifeEngine {
        &self.engine
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_active()
    }

    /// Applied delay between generations, in milliseconds
    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.engine.population()
    }

    pub fn start(&mut self) {
        if !self.timer.is_active() {
            info!("simulation started ({} ms/generation)", self.delay_ms);
            self.timer.start();
        }
    }

    pub fn stop(&mut self) {
        if self.timer.is_active() {
            info!("simulation stopped at generation {}", self.generation);
            self.timer.stop();
        }
    }

    pub fn toggle_running(&mut self) {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Set the inter-generation delay, clamped to the configured bounds.
    /// Takes effect immediately, including while running. Returns the applied value.
    pub fn apply_delay(&mut self, requested_ms: u64) -> u64 {
        let applied = requested_ms.clamp(self.min_delay_ms, self.max_delay_ms);
        if applied != requested_ms {
            warn!(
                "delay {} ms outside {}..={} ms, using {} ms",
                requested_ms, self.min_delay_ms, self.max_delay_ms, applied
            );
        }
        self.delay_ms = applied;
        self.timer.set_interval(Duration::from_millis(applied));
        info!("generation delay set to {} ms", applied);
        applied
    }

    /// Flip one cell; run state is untouched
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<(), EngineError> {
        self.engine.toggle(row, col)
    }

    /// Stamp a pattern centered on the grid; run state is untouched
    pub fn place_centered(&mut self, pattern: &Pattern) -> Result<(), EngineError> {
        let (rows, cols) = self.engine.dimensions();
        let row = rows.saturating_sub(pattern.rows) / 2;
        let col = cols.saturating_sub(pattern.cols) / 2;
        pattern.place_on(&mut self.engine, row, col)?;
        info!("placed {} ({}) at ({}, {})", pattern.name, pattern.description, row, col);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.engine.clear();
        self.generation = 0;
        debug!("grid cleared");
    }

    /// Randomize from the controller's own generator
    pub fn randomize(&mut self) {
        self.engine.randomize(&mut self.rng);
        self.generation = 0;
        debug!("grid randomized, population {}", self.engine.population());
    }

    pub fn randomize_seeded(&mut self, seed: u64) {
        self.engine.randomize_seeded(seed);
        self.generation = 0;
        debug!("grid randomized with seed {}", seed);
    }

    /// Advance exactly one generation regardless of run state
    pub fn step_once(&mut self) {
        self.engine.step();
        self.generation += 1;
    }

    /// Feed frame time to the step timer and run every generation that came due.
    /// Returns the number of generations advanced; always 0 while stopped.
    pub fn tick(&mut self, elapsed: Duration) -> u32 {
        let due = self.timer.advance(elapsed);
        for _ in 0..due {
            self.step_once();
        }
        due
    }
}

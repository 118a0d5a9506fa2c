mod config;
mod controller;
mod timer;

pub use config::{ConfigError, SimulationConfig};
pub use controller::SimulationController;
pub use timer::{MAX_CATCH_UP, StepTimer};

// Domain layer - grid and transition rule
pub mod domain;

// Application layer - configuration, step timing, run state
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, EngineError, LifeEngine, Pattern, presets};
pub use application::{ConfigError, SimulationConfig, SimulationController, StepTimer};

mod cell;
mod engine;
mod error;
mod patterns;

pub use cell::Cell;
pub use engine::LifeEngine;
pub use error::EngineError;
pub use patterns::{Pattern, presets};
